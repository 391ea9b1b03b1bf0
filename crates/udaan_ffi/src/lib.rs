//! Flutter bridge for UdaanSetu; all exported calls live in [`api`].

pub mod api;
