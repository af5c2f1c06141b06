mod azure_describe;
mod azure_image_analysis;
mod azure_vision_http;
mod captioning_factory;

pub use azure_describe::AzureDescribeProvider;
pub use azure_image_analysis::AzureImageAnalysisProvider;
pub use azure_vision_http::SUBSCRIPTION_KEY_HEADER;
pub use captioning_factory::{CaptioningFactory, CaptioningFactoryError};
