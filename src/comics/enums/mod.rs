pub mod proxy_action;
pub mod visual_style;
