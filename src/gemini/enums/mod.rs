pub mod finish_reason;
pub mod response_modality;
