//! Token tables for `data/nova.g4`, generated at build time.

include!(concat!(env!("OUT_DIR"), "/nova_tokens.rs"));
