pub mod a001_production_line;
pub mod a002_work_order;
pub mod a003_rfid_garment;
