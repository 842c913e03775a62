pub mod pull_request_handler;
