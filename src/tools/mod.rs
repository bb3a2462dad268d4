pub mod msg_buffer;
