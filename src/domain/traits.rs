use crate::domain::error::PickerError;
use crate::domain::model::Suggestion;
use async_trait::async_trait;

/// Trait for remote suggestion providers
///
/// The picker never touches the network directly; it talks to whatever
/// implements this. Production wires in the PanLex client (optionally
/// behind the caching app state); tests inject deterministic doubles.
#[async_trait]
pub trait SuggestService: Send + Sync {
    /// Look up ranked suggestions for the literal input text
    async fn suggest(&self, txt: &str) -> Result<Vec<Suggestion>, PickerError>;
}

/// Minimal capability surface a host UI needs from an embeddable widget:
/// it can be re-rendered and disposed. Mounting is construction.
pub trait Component {
    fn render(&self) -> String;
    fn dispose(&self);
}
