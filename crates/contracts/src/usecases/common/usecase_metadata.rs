/// UseCase metadata used for identification and endpoint routing
pub trait UseCaseMetadata {
    /// UseCase index (e.g. "u101")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "enhance_prompt")
    fn usecase_name() -> &'static str;

    /// Name shown in the UI
    fn display_name() -> &'static str;

    /// Backend path relative to the API base, always starting with '/'
    fn endpoint() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Full name of the form "u101_enhance_prompt"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
