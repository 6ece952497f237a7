// tagsmith/src/card/session.rs

//! Connected I/O channel to a single tag.

use log::{debug, warn};

use crate::constants::{CC_PAGE, READ_LEN};
use crate::protocol::{Command, Response, VersionInfo, parser};
use crate::transport::Transport;
use crate::types::{BlockData, PageData, Password, Technology};
use crate::{Error, Result};

/// An open I/O channel to one tag. Connects on creation and closes when
/// dropped, so every exit path disconnects.
pub struct Session<'a> {
    tag: &'a mut dyn Transport,
    technology: Technology,
}

impl<'a> Session<'a> {
    /// Connect `tag` over `technology`.
    pub fn open(tag: &'a mut dyn Transport, technology: Technology) -> Result<Self> {
        tag.connect(technology)?;
        debug!("connected via {}", technology);
        Ok(Self { tag, technology })
    }

    /// Connected technology.
    pub fn technology(&self) -> Technology {
        self.technology
    }

    /// Send one command and decode the reply.
    pub fn execute(&mut self, cmd: Command) -> Result<Response> {
        let frame = cmd.encode();
        debug!("-> {:?}", cmd);
        #[cfg(feature = "diagnostics")]
        log::trace!(">> {}", crate::utils::bytes_to_hex_spaced(&frame));

        let reply = self.tag.transceive(&frame)?;

        #[cfg(feature = "diagnostics")]
        log::trace!("<< {}", crate::utils::bytes_to_hex_spaced(&reply));
        Response::decode(cmd.command_code(), &reply)
    }

    /// READ: four pages starting at `page` (or one 16-byte block).
    pub fn read(&mut self, address: u8) -> Result<[u8; READ_LEN]> {
        match self.execute(Command::Read { address })? {
            Response::Read { data } => Ok(data),
            other => Err(unexpected("READ", &other)),
        }
    }

    /// First page of a READ.
    pub fn read_page(&mut self, page: u8) -> Result<PageData> {
        parser::page_at(&self.read(page)?, 0)
    }

    /// WRITE one page.
    pub fn write_page(&mut self, page: u8, data: PageData) -> Result<()> {
        debug!("write page {} = {:02x?}", page, data);
        match self.execute(Command::WritePage { page, data })? {
            Response::Ack => Ok(()),
            other => Err(unexpected("WRITE", &other)),
        }
    }

    /// READ one sector-card block. The sector must be authenticated.
    pub fn read_block(&mut self, block: u8) -> Result<BlockData> {
        Ok(BlockData::from_bytes(self.read(block)?))
    }

    /// WRITE one sector-card block.
    pub fn write_block(&mut self, block: u8, data: BlockData) -> Result<()> {
        debug!("write block {}", block);
        match self.execute(Command::WriteBlock { block, data })? {
            Response::Ack => Ok(()),
            other => Err(unexpected("WRITE", &other)),
        }
    }

    /// GET_VERSION.
    pub fn get_version(&mut self) -> Result<VersionInfo> {
        match self.execute(Command::GetVersion)? {
            Response::Version(v) => Ok(v),
            other => Err(unexpected("GET_VERSION", &other)),
        }
    }

    /// PWD_AUTH; returns the PACK.
    pub fn pwd_auth(&mut self, password: &Password) -> Result<[u8; 2]> {
        match self.execute(Command::PwdAuth {
            password: *password,
        })? {
            Response::Pack { pack } => Ok(pack),
            other => Err(unexpected("PWD_AUTH", &other)),
        }
    }

    /// Read page 3.
    pub fn read_capability_container(&mut self) -> Result<crate::card::CapabilityContainer> {
        Ok(crate::card::CapabilityContainer::from_page(
            self.read_page(CC_PAGE)?,
        ))
    }

    /// Authenticate a sector with key A. `Ok(false)` when the key is wrong.
    pub fn authenticate_sector_key_a(&mut self, sector: u8, key: &[u8; 6]) -> Result<bool> {
        self.tag.authenticate_sector_key_a(sector, key)
    }
}

fn unexpected(command: &str, response: &Response) -> Error {
    Error::Transceive(format!("unexpected reply to {}: {:?}", command, response))
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        match self.tag.close() {
            Ok(()) => debug!("closed {} session", self.technology),
            Err(e) => warn!("closing {} session failed: {}", self.technology, e),
        }
    }
}
