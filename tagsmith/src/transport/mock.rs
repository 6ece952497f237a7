// tagsmith/src/transport/mock.rs

//! Simulated tag for unit and integration tests.
//!
//! Page-addressed tags keep a page array and follow the behaviour of real
//! NTAG parts closely enough to exercise the operations: identifier pages
//! are read-only unless the tag is `magic`, the lock page and the
//! capability container are one-time-programmable (bits can only be set),
//! static lock bits block writes to pages 3-15, AUTH0/ACCESS gate access
//! until a successful PWD_AUTH, and the password/PACK pages read as zeros.
//! Sector-addressed cards keep 16-byte blocks behind key A.

use crate::card::layout::{self, PasswordPages};
use crate::constants::{
    ACCESS_PROT_BIT, ACK, AUTH0_DISABLED, CC_ACCESS_READ_WRITE, CC_NDEF_MAGIC, CC_PAGE,
    CC_VERSION_1_0, CMD_GET_VERSION, CMD_PWD_AUTH, CMD_READ, CMD_WRITE_BLOCK, CMD_WRITE_PAGE,
    DEFAULT_CLASSIC_KEY, LOCK_PAGE, USER_DATA_START_PAGE,
};
use crate::ndef::tlv;
use crate::protocol::checksum::{bcc, bcc0, bcc1};
use crate::transport::traits::Transport;
use crate::types::{ClassicDescriptor, PageData, Technology, UltralightKind};
use crate::{Error, Result};

/// Reply used for every rejected command.
pub const MOCK_NAK: u8 = 0x00;

#[derive(Debug, Clone)]
enum Memory {
    Pages(Vec<PageData>),
    Blocks(Vec<[u8; 16]>),
    Opaque,
}

/// Mock tag. Records every frame sent and every write that landed.
#[derive(Debug, Clone)]
pub struct MockTag {
    uid: Vec<u8>,
    technologies: Vec<Technology>,
    memory: Memory,
    version: Option<[u8; 8]>,
    password_pages: Option<PasswordPages>,
    classic: Option<ClassicDescriptor>,
    ultralight_kind: Option<UltralightKind>,
    sak: Option<u8>,
    key_a: [u8; 6],
    authenticated: bool,
    sector_auth: Option<u8>,
    connected: Option<Technology>,
    /// Identifier pages/block 0 accept writes
    pub magic: bool,
    /// Every frame passed to `transceive`.
    pub sent: Vec<Vec<u8>>,
    /// Writes that were accepted: (page or block, data)
    pub writes: Vec<(u8, Vec<u8>)>,
    /// Successful `connect` calls.
    pub connect_count: usize,
    /// `close` calls, failed ones included.
    pub close_count: usize,
    /// Writes to these pages/blocks fail at the transport level
    pub fail_writes_to: Vec<u8>,
    /// Every connect/transceive fails with `TagLost`
    pub lost: bool,
    /// `close` reports an error (the channel is still released)
    pub fail_close: bool,
}

impl MockTag {
    fn base(uid: &[u8], technologies: Vec<Technology>, memory: Memory) -> Self {
        Self {
            uid: uid.to_vec(),
            technologies,
            memory,
            version: None,
            password_pages: None,
            classic: None,
            ultralight_kind: None,
            sak: None,
            key_a: DEFAULT_CLASSIC_KEY,
            authenticated: false,
            sector_auth: None,
            connected: None,
            magic: false,
            sent: Vec::new(),
            writes: Vec::new(),
            connect_count: 0,
            close_count: 0,
            fail_writes_to: Vec::new(),
            lost: false,
            fail_close: false,
        }
    }

    fn identifier_pages(uid: &[u8; 7], total_pages: u16) -> Vec<PageData> {
        let mut pages = vec![[0u8; 4]; total_pages as usize];
        pages[0] = [uid[0], uid[1], uid[2], bcc0(uid)];
        pages[1] = [uid[3], uid[4], uid[5], uid[6]];
        pages[2] = [bcc1(uid), 0x48, 0x00, 0x00];
        pages
    }

    /// NDEF-formatted NTAG with an empty message. Unknown size codes get
    /// an NTAG213-sized memory without a password layout.
    pub fn ntag(size_code: u8, uid: [u8; 7]) -> Self {
        let l = layout::layout_for(size_code);
        let total = l.map_or(45, |l| l.total_pages);
        let cc_size = l.map_or(0x12, |l| l.cc_size);

        let mut pages = Self::identifier_pages(&uid, total);
        pages[CC_PAGE as usize] = [CC_NDEF_MAGIC, CC_VERSION_1_0, cc_size, CC_ACCESS_READ_WRITE];
        pages[USER_DATA_START_PAGE as usize] = [0x03, 0x00, 0xFE, 0x00];

        let password_pages = l.and_then(|l| l.password);
        if let Some(p) = password_pages {
            pages[p.config as usize] = [0x04, 0x00, 0x00, AUTH0_DISABLED];
            pages[p.access() as usize] = [0x00, 0x05, 0x00, 0x00];
        }

        let mut tag = Self::base(
            &uid,
            vec![Technology::NfcA, Technology::MifareUltralight, Technology::Ndef],
            Memory::Pages(pages),
        );
        tag.version = Some([0x00, 0x04, 0x04, 0x02, 0x01, 0x00, size_code, 0x03]);
        tag.password_pages = password_pages;
        tag.ultralight_kind = Some(UltralightKind::Unknown);
        tag
    }

    /// Factory-fresh NTAG: capability container not yet written.
    pub fn blank_ntag(size_code: u8, uid: [u8; 7]) -> Self {
        let mut tag = Self::ntag(size_code, uid);
        tag.set_page(CC_PAGE, [0; 4]);
        tag.set_page(USER_DATA_START_PAGE, [0; 4]);
        tag.technologies = vec![
            Technology::NfcA,
            Technology::MifareUltralight,
            Technology::NdefFormatable,
        ];
        tag
    }

    /// Ultralight C: no GET_VERSION, no PWD_AUTH.
    pub fn ultralight_c(uid: [u8; 7]) -> Self {
        let mut pages = Self::identifier_pages(&uid, layout::ULTRALIGHT_C_TOTAL_PAGES);
        pages[CC_PAGE as usize] = [CC_NDEF_MAGIC, CC_VERSION_1_0, 0x12, CC_ACCESS_READ_WRITE];
        pages[USER_DATA_START_PAGE as usize] = [0x03, 0x00, 0xFE, 0x00];
        let mut tag = Self::base(
            &uid,
            vec![Technology::NfcA, Technology::MifareUltralight, Technology::Ndef],
            Memory::Pages(pages),
        );
        tag.ultralight_kind = Some(UltralightKind::UltralightC);
        tag
    }

    /// Sector-addressed card with a 4-byte identifier.
    pub fn classic(descriptor: ClassicDescriptor, uid: [u8; 4]) -> Self {
        let blocks = (descriptor.size as usize / 16).clamp(1, 256);
        let mut memory = vec![[0u8; 16]; blocks];
        memory[0] = [
            uid[0], uid[1], uid[2], uid[3], bcc(&uid), 0x08, 0x04, 0x00, 0x62, 0x63, 0x64, 0x65,
            0x66, 0x67, 0x68, 0x69,
        ];
        let mut tag = Self::base(
            &uid,
            vec![Technology::NfcA, Technology::MifareClassic],
            Memory::Blocks(memory),
        );
        tag.classic = Some(descriptor);
        tag.sak = Some(0x08);
        tag
    }

    /// ISO-DEP tag with the given SAK and no addressable memory.
    pub fn iso_dep(sak: u8, uid: &[u8]) -> Self {
        let mut tag = Self::base(
            uid,
            vec![Technology::NfcA, Technology::IsoDep],
            Memory::Opaque,
        );
        tag.sak = Some(sak);
        tag
    }

    /// Tag exposing only the given technologies and no memory.
    pub fn with_technologies(uid: &[u8], technologies: Vec<Technology>) -> Self {
        Self::base(uid, technologies, Memory::Opaque)
    }

    /// Store an NDEF message in user memory (TLV wrapped).
    pub fn with_ndef_message(mut self, message: &[u8]) -> Self {
        let area = tlv::wrap(message);
        for (i, chunk) in area.chunks(4).enumerate() {
            let mut page = [0u8; 4];
            page[..chunk.len()].copy_from_slice(chunk);
            self.set_page(USER_DATA_START_PAGE + i as u8, page);
        }
        self
    }

    /// Pre-set a password and enable write protection from page 4.
    pub fn with_password(mut self, pwd: [u8; 4], pack: [u8; 2]) -> Self {
        if let Some(p) = self.password_pages {
            self.set_page(p.pwd, pwd);
            self.set_page(p.pack, [pack[0], pack[1], 0, 0]);
            let mut cfg = self.page(p.config);
            cfg[3] = USER_DATA_START_PAGE;
            self.set_page(p.config, cfg);
        }
        self
    }

    /// Change the key A guarding every sector.
    pub fn with_key_a(mut self, key: [u8; 6]) -> Self {
        self.key_a = key;
        self
    }

    /// Variant reported by `ultralight_kind`.
    pub fn with_ultralight_kind(mut self, kind: UltralightKind) -> Self {
        self.ultralight_kind = Some(kind);
        self
    }

    /// Drop the GET_VERSION reply (the tag NAKs the probe).
    pub fn without_version(mut self) -> Self {
        self.version = None;
        self
    }

    /// Grow or shrink page memory. New pages read as zeros.
    pub fn with_page_count(mut self, total: usize) -> Self {
        if let Memory::Pages(p) = &mut self.memory {
            p.resize(total, [0; 4]);
        }
        self
    }

    /// Make the identifier writable, as on a "magic" clone tag.
    pub fn magic(mut self) -> Self {
        self.magic = true;
        self
    }

    /// Raw page content, bypassing access rules. Out of range pages read as zeros.
    pub fn page(&self, page: u8) -> PageData {
        match &self.memory {
            Memory::Pages(p) => p.get(page as usize).copied().unwrap_or([0; 4]),
            _ => [0; 4],
        }
    }

    /// Overwrite a page, bypassing access rules.
    pub fn set_page(&mut self, page: u8, data: PageData) {
        if let Memory::Pages(p) = &mut self.memory {
            if let Some(slot) = p.get_mut(page as usize) {
                *slot = data;
            }
        }
    }

    /// Raw block content. Out of range blocks read as zeros.
    pub fn block(&self, block: u8) -> [u8; 16] {
        match &self.memory {
            Memory::Blocks(b) => b.get(block as usize).copied().unwrap_or([0; 16]),
            _ => [0; 16],
        }
    }

    /// Overwrite a block, bypassing key checks.
    pub fn set_block(&mut self, block: u8, data: [u8; 16]) {
        if let Memory::Blocks(b) = &mut self.memory {
            if let Some(slot) = b.get_mut(block as usize) {
                *slot = data;
            }
        }
    }

    /// True while a technology is connected.
    pub fn is_connected(&self) -> bool {
        self.connected.is_some()
    }

    /// Write commands sent, whether or not the tag accepted them.
    pub fn write_attempts(&self) -> usize {
        self.sent
            .iter()
            .filter(|f| matches!(f.first(), Some(&CMD_WRITE_PAGE) | Some(&CMD_WRITE_BLOCK)))
            .count()
    }

    /// Current identifier as stored in memory.
    pub fn stored_uid(&self) -> Vec<u8> {
        match &self.memory {
            Memory::Pages(_) => {
                let (p0, p1) = (self.page(0), self.page(1));
                vec![p0[0], p0[1], p0[2], p1[0], p1[1], p1[2], p1[3]]
            }
            Memory::Blocks(_) => self.block(0)[..4].to_vec(),
            Memory::Opaque => self.uid.clone(),
        }
    }

    fn auth0(&self) -> u8 {
        self.password_pages
            .map_or(AUTH0_DISABLED, |p| self.page(p.config)[3])
    }

    fn read_protected(&self) -> bool {
        self.password_pages
            .is_some_and(|p| self.page(p.access())[0] & ACCESS_PROT_BIT != 0)
    }

    fn gated(&self, page: u8) -> bool {
        !self.authenticated && page >= self.auth0()
    }

    fn statically_locked(&self, page: u8) -> bool {
        let lock = self.page(LOCK_PAGE);
        match page {
            3..=7 => lock[2] & (1 << page) != 0,
            8..=15 => lock[3] & (1 << (page - 8)) != 0,
            _ => false,
        }
    }

    fn hidden(&self, page: u8) -> bool {
        self.password_pages
            .is_some_and(|p| page == p.pwd || page == p.pack)
    }

    fn read(&self, addr: u8) -> Vec<u8> {
        match &self.memory {
            Memory::Pages(pages) => {
                let total = pages.len();
                if addr as usize >= total || (self.read_protected() && self.gated(addr)) {
                    return vec![MOCK_NAK];
                }
                let mut out = Vec::with_capacity(16);
                for i in 0..4 {
                    let page = ((addr as usize + i) % total) as u8;
                    if self.hidden(page) {
                        out.extend_from_slice(&[0; 4]);
                    } else {
                        out.extend_from_slice(&pages[page as usize]);
                    }
                }
                out
            }
            Memory::Blocks(blocks) => {
                if self.sector_auth != Some(addr / 4) {
                    return vec![MOCK_NAK];
                }
                blocks
                    .get(addr as usize)
                    .map_or(vec![MOCK_NAK], |b| b.to_vec())
            }
            Memory::Opaque => vec![MOCK_NAK],
        }
    }

    fn write_page(&mut self, page: u8, data: PageData) -> Vec<u8> {
        let total = match &self.memory {
            Memory::Pages(p) => p.len(),
            _ => return vec![MOCK_NAK],
        };
        if page as usize >= total || self.gated(page) || self.statically_locked(page) {
            return vec![MOCK_NAK];
        }
        let current = self.page(page);
        let next = match page {
            0 | 1 if !self.magic => return vec![MOCK_NAK],
            2 if !self.magic => [current[0], current[1], current[2] | data[2], current[3] | data[3]],
            3 => [
                current[0] | data[0],
                current[1] | data[1],
                current[2] | data[2],
                current[3] | data[3],
            ],
            _ => data,
        };
        self.set_page(page, next);
        self.writes.push((page, data.to_vec()));
        vec![ACK]
    }

    fn write_block(&mut self, block: u8, data: &[u8]) -> Vec<u8> {
        if self.sector_auth != Some(block / 4) || (block == 0 && !self.magic) {
            return vec![MOCK_NAK];
        }
        let mut next = [0u8; 16];
        next.copy_from_slice(data);
        match &mut self.memory {
            Memory::Blocks(b) if (block as usize) < b.len() => b[block as usize] = next,
            _ => return vec![MOCK_NAK],
        }
        self.writes.push((block, data.to_vec()));
        vec![ACK]
    }

    fn pwd_auth(&mut self, pwd: &[u8]) -> Vec<u8> {
        let Some(p) = self.password_pages else {
            return vec![MOCK_NAK];
        };
        if self.page(p.pwd)[..] != *pwd {
            return vec![MOCK_NAK];
        }
        self.authenticated = true;
        let pack = self.page(p.pack);
        vec![pack[0], pack[1]]
    }
}

impl Transport for MockTag {
    fn uid(&self) -> &[u8] {
        &self.uid
    }

    fn technologies(&self) -> &[Technology] {
        &self.technologies
    }

    fn connect(&mut self, technology: Technology) -> Result<()> {
        if self.lost {
            return Err(Error::TagLost);
        }
        if !self.technologies.contains(&technology) {
            return Err(Error::UnsupportedOperation(format!(
                "{} is not available on this tag",
                technology
            )));
        }
        if self.connected.is_some() {
            return Err(Error::Transceive("another technology is connected".into()));
        }
        self.connected = Some(technology);
        self.connect_count += 1;
        self.authenticated = false;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.connected = None;
        self.sector_auth = None;
        self.close_count += 1;
        if self.fail_close {
            return Err(Error::Transceive("close failed".into()));
        }
        Ok(())
    }

    fn transceive(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        if self.lost {
            return Err(Error::TagLost);
        }
        if self.connected.is_none() {
            return Err(Error::Transceive("not connected".into()));
        }
        self.sent.push(data.to_vec());
        let reply = match data {
            [CMD_GET_VERSION] => self.version.map_or(vec![MOCK_NAK], |v| v.to_vec()),
            [CMD_READ, addr] => self.read(*addr),
            [CMD_WRITE_PAGE, page, a, b, c, d] => {
                if self.fail_writes_to.contains(page) {
                    return Err(Error::Transceive(format!("write to page {} failed", page)));
                }
                self.write_page(*page, [*a, *b, *c, *d])
            }
            [CMD_WRITE_BLOCK, block, rest @ ..] if rest.len() == 16 => {
                if self.fail_writes_to.contains(block) {
                    return Err(Error::Transceive(format!("write to block {} failed", block)));
                }
                self.write_block(*block, rest)
            }
            [CMD_PWD_AUTH, pwd @ ..] if pwd.len() == 4 => self.pwd_auth(pwd),
            _ => vec![MOCK_NAK],
        };
        Ok(reply)
    }

    fn authenticate_sector_key_a(&mut self, sector: u8, key: &[u8; 6]) -> Result<bool> {
        if self.lost {
            return Err(Error::TagLost);
        }
        if !matches!(self.memory, Memory::Blocks(_)) {
            return Err(Error::UnsupportedOperation(
                "not a sector-addressed card".into(),
            ));
        }
        if *key == self.key_a {
            self.sector_auth = Some(sector);
            Ok(true)
        } else {
            self.sector_auth = None;
            Ok(false)
        }
    }

    fn classic_descriptor(&self) -> Option<ClassicDescriptor> {
        self.classic
    }

    fn ultralight_kind(&self) -> Option<UltralightKind> {
        self.ultralight_kind
    }

    fn sak(&self) -> Option<u8> {
        self.sak
    }
}
