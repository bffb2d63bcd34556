mod common;
mod test_dispatcher;
mod test_error;
mod test_streaming;
