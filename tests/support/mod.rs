pub mod record_buffer;
