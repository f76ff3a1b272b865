//! HTTP e2e tests: the router is driven in-process with `tower::ServiceExt::oneshot`;
//! `listener` runs a real server on 127.0.0.1:0.

mod common;
mod generate;
mod health;
mod listener;
mod test_prompt;
