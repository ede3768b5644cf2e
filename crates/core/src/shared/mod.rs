pub mod api_error;
pub mod base64_payload;
pub mod client_config;
pub mod constants;
pub mod image_payload;
pub mod null_default;
pub mod output_image_params;
pub mod page;
