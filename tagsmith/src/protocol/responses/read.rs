// tagsmith/src/protocol/responses/read.rs

//! READ reply.

use crate::constants::READ_LEN;
use crate::protocol::parser;
use crate::Result;

/// Decode a READ reply: 16 data bytes (four pages or one block).
pub fn decode_read(data: &[u8]) -> Result<[u8; READ_LEN]> {
    parser::read_block_at(data, 0)
}
