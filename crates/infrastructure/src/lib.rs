//! Palisade DNS infrastructure layer: the resolver chain with its policy
//! stages, the list event emitter and the resilient list downloader.
pub mod dns;
pub mod events;
pub mod lists;
