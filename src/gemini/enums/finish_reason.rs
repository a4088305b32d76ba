#[non_exhaustive]
pub struct FinishReason;

impl FinishReason {
    pub const STOP: &'static str = "STOP";

    pub fn is_normal(reason: &str) -> bool {
        reason == Self::STOP
    }
}
