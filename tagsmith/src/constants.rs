// tagsmith/src/constants.rs
//! Protocol constants shared by the command codec and tag operations

/// GET_VERSION (NTAG21x / Ultralight EV1)
pub const CMD_GET_VERSION: u8 = 0x60;

/// READ: returns 16 bytes (four pages, or one sector-card block)
pub const CMD_READ: u8 = 0x30;

/// WRITE of one 4-byte page on page-addressed tags
pub const CMD_WRITE_PAGE: u8 = 0xA2;

/// WRITE of one 16-byte block on sector-addressed cards
pub const CMD_WRITE_BLOCK: u8 = 0xA0;

/// PWD_AUTH followed by the 4 password bytes
pub const CMD_PWD_AUTH: u8 = 0x1B;

/// 4-bit ACK returned by page and block writes
pub const ACK: u8 = 0x0A;

/// NXP vendor id in the GET_VERSION reply
pub const NXP_VENDOR_ID: u8 = 0x04;

/// Length of a GET_VERSION reply
pub const VERSION_LEN: usize = 8;

/// Bytes returned by a single READ
pub const READ_LEN: usize = 16;

/// Bytes per Ultralight/NTAG page
pub const PAGE_SIZE: usize = 4;
/// Bytes per sector-card block
pub const BLOCK_SIZE: usize = 16;

/// Cascade tag mixed into BCC0 of 7-byte identifiers
pub const CASCADE_TAG: u8 = 0x88;

/// Factory default key A of sector-addressed cards
pub const DEFAULT_CLASSIC_KEY: [u8; 6] = [0xFF; 6];

/// Page holding the static lock bytes (bytes 2 and 3)
pub const LOCK_PAGE: u8 = 2;

/// Capability container page
pub const CC_PAGE: u8 = 3;

/// First user-data page of Type 2 tags
pub const USER_DATA_START_PAGE: u8 = 4;

/// Capability container magic number for NDEF-formatted tags
pub const CC_NDEF_MAGIC: u8 = 0xE1;

/// Capability container version 1.0
pub const CC_VERSION_1_0: u8 = 0x10;

/// CC byte 3: read/write access granted
pub const CC_ACCESS_READ_WRITE: u8 = 0x00;

/// CC byte 3: write access denied
pub const CC_ACCESS_READ_ONLY: u8 = 0x0F;

/// AUTH0 value that protects everything from the first user-data page on
pub const AUTH0_PROTECT_USER_DATA: u8 = USER_DATA_START_PAGE;

/// AUTH0 value that disables password protection
pub const AUTH0_DISABLED: u8 = 0xFF;

/// ACCESS.PROT: set = read and write protected, clear = write protected only
pub const ACCESS_PROT_BIT: u8 = 0x80;

/// Type 2 TLV padding byte (no length field)
pub const TLV_NULL: u8 = 0x00;
/// Lock control TLV
pub const TLV_LOCK_CONTROL: u8 = 0x01;
/// Memory control TLV
pub const TLV_MEMORY_CONTROL: u8 = 0x02;
/// NDEF message TLV
pub const TLV_NDEF: u8 = 0x03;
/// Terminator TLV (no length field)
pub const TLV_TERMINATOR: u8 = 0xFE;
