pub mod d400_line_tracking;
