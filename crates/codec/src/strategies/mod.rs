mod base64;
mod binary;
mod hex;
mod html;
mod rot13;
mod url;

pub use self::base64::Base64;
pub use self::binary::Binary;
pub use self::hex::Hex;
pub use self::html::HtmlEntities;
pub use self::rot13::Rot13;
pub use self::url::Url;
