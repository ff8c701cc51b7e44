/// Identification of a use case for logs and the UI.
pub trait UseCaseMetadata {
    /// Index such as "u501"
    fn usecase_index() -> &'static str;

    /// Technical name such as "scheme_chat"
    fn usecase_name() -> &'static str;

    /// "u501_scheme_chat"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
