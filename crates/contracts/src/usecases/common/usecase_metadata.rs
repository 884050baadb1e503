/// Identification of a use case screen
pub trait UseCaseMetadata {
    /// Index, e.g. "u501"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "rfid_registration"
    fn usecase_name() -> &'static str;

    /// Title shown on the tab and in the sidebar
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Tab key, e.g. "u501_rfid_registration"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
