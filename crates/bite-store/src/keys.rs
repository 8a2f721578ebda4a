//! Storage slot keys.
//!
//! Each concern owns exactly one slot. The cart never shares a slot with the
//! authentication token or the cached user profile.

/// Slot holding the serialized cart line items.
pub const CART: &str = "@bite:cart";

/// Slot holding the authentication token.
pub const AUTH_TOKEN: &str = "@bite:token";

/// Slot holding the cached user profile.
pub const USER_PROFILE: &str = "@bite:user";
