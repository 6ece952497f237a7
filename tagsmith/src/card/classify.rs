// tagsmith/src/card/classify.rs

//! Best-effort identification of tag hardware.
//!
//! Order: sector-addressed cards by the platform's type/size pair,
//! page-addressed tags by the GET_VERSION storage size code and the
//! capability container, ISO-DEP cards by SAK, otherwise the technology
//! list. Failed probes degrade the result; they never fail the encounter.

use log::{debug, warn};

use crate::card::cc::CapabilityContainer;
use crate::card::identity::TagIdentity;
use crate::card::layout::{self, NtagLayout};
use crate::card::profile::{ChipFamily, ChipProfile, NdefStatus};
use crate::card::session::Session;
use crate::protocol::VersionInfo;
use crate::transport::Transport;
use crate::types::{ClassicDescriptor, Technology, UltralightKind};
use crate::Result;

/// SAK of DESFire EV1 and older.
pub const SAK_DESFIRE: u8 = 0x20;
/// SAK of later DESFire generations.
pub const SAK_DESFIRE_EV: u8 = 0x24;
/// SAK of JCOP smart cards.
pub const SAK_JCOP: u8 = 0x28;

/// Identity and chip profile of one encounter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// What the platform reported, plus GET_VERSION when probed.
    pub identity: TagIdentity,
    /// Derived chip profile.
    pub profile: ChipProfile,
}

/// Classify the tag in the field. Never fails; probes that do not
/// answer leave the profile less specific.
pub fn classify(tag: &mut dyn Transport, probe_version: bool) -> Classification {
    let mut identity = TagIdentity::capture(tag);

    let profile = match tag.classic_descriptor() {
        Some(desc) if identity.has(Technology::MifareClassic) => classic_profile(desc),
        _ if identity.has(Technology::MifareUltralight) => {
            let version = if probe_version {
                probe(tag)
            } else {
                None
            };
            if let Some(v) = version {
                identity = identity.with_version(v);
            }
            page_profile(tag, &identity, version)
        }
        _ if identity.has(Technology::IsoDep) => {
            ChipProfile::new(smart_card_name(tag.sak()), ChipFamily::SmartCard)
        }
        _ => ChipProfile::new(identity.technology_list(), ChipFamily::Other),
    };
    debug!("classified {} as {}", identity, profile);
    Classification { identity, profile }
}

/// `Mifare Classic 1K` and the like.
pub fn classic_name(desc: ClassicDescriptor) -> String {
    let kind = match desc.type_code {
        ClassicDescriptor::TYPE_PLUS => "Mifare Plus",
        ClassicDescriptor::TYPE_PRO => "Mifare Pro",
        _ => "Mifare Classic",
    };
    let size = match desc.size {
        ClassicDescriptor::SIZE_1K => "1K".to_string(),
        ClassicDescriptor::SIZE_2K => "2K".to_string(),
        ClassicDescriptor::SIZE_4K => "4K".to_string(),
        ClassicDescriptor::SIZE_MINI => "Mini".to_string(),
        other => format!("{}B", other),
    };
    format!("{} {}", kind, size)
}

fn classic_profile(desc: ClassicDescriptor) -> ChipProfile {
    // NDEF on sector-addressed cards is not handled here
    ChipProfile::new(classic_name(desc), ChipFamily::SectorAddressed)
        .with_ndef(NdefStatus::NotNdef)
        .with_capacity(Some(desc.size as usize))
}

/// Name of an ISO-DEP card from its SAK.
pub fn smart_card_name(sak: Option<u8>) -> &'static str {
    match sak {
        Some(SAK_DESFIRE) => "Mifare DESFire",
        Some(SAK_DESFIRE_EV) => "Mifare DESFire EV1/2/3",
        Some(SAK_JCOP) => "ISO-DEP (JCOP/CPU)",
        _ => "ISO-DEP (CPU Card)",
    }
}

/// GET_VERSION in a session of its own: a NAK drops the tag back to idle,
/// so later commands need a fresh connection. Non-NXP replies count as a
/// failed probe.
pub fn probe(tag: &mut dyn Transport) -> Option<VersionInfo> {
    let result: Result<VersionInfo> = (|| {
        let mut session = Session::open(tag, Technology::MifareUltralight)?;
        session.get_version()
    })();
    match result {
        Ok(v) if v.is_nxp() => Some(v),
        Ok(v) => {
            warn!("version probe returned vendor {:#04x}", v.vendor_id);
            None
        }
        Err(e) => {
            warn!("version probe failed: {}", e);
            None
        }
    }
}

/// User memory of a page-addressed tag from its version reply or platform
/// variant.
pub fn user_memory(version: Option<&VersionInfo>, kind: Option<UltralightKind>) -> Option<usize> {
    if let Some(l) = version.and_then(|v| layout::layout_for(v.storage_size)) {
        return Some(l.user_bytes as usize);
    }
    match kind {
        Some(UltralightKind::Ultralight) => Some(layout::ULTRALIGHT_USER_BYTES as usize),
        Some(UltralightKind::UltralightC) => Some(layout::ULTRALIGHT_C_USER_BYTES as usize),
        _ => None,
    }
}

fn page_profile(
    tag: &mut dyn Transport,
    identity: &TagIdentity,
    version: Option<VersionInfo>,
) -> ChipProfile {
    let ntag: Option<&NtagLayout> = version.and_then(|v| layout::layout_for(v.storage_size));
    let name = match (version, tag.ultralight_kind()) {
        (Some(v), _) => layout::ntag_name(v.storage_size),
        (None, Some(UltralightKind::Ultralight)) => "Mifare Ultralight".to_string(),
        (None, Some(UltralightKind::UltralightC)) => "Mifare Ultralight C".to_string(),
        (None, _) => identity.technology_list(),
    };

    let cc = (|| {
        let mut session = Session::open(tag, Technology::MifareUltralight)?;
        session.read_capability_container()
    })();

    let profile = ChipProfile::new(name, ChipFamily::PageAddressed).with_model(ntag.map(|l| l.model));
    match cc {
        Ok(cc) if cc.is_ndef() => profile
            .with_ndef(cc.ndef_status())
            .with_capacity(Some(cc.data_area_bytes())),
        Ok(cc) => profile
            .with_ndef(cc.ndef_status())
            .with_capacity(user_memory(version.as_ref(), tag.ultralight_kind())),
        Err(e) => {
            warn!("capability container read failed: {}", e);
            profile.with_capacity(user_memory(version.as_ref(), tag.ultralight_kind()))
        }
    }
}

/// Capability container for formatting a blank tag of this kind.
pub fn container_for(version: Option<&VersionInfo>, kind: Option<UltralightKind>) -> Option<CapabilityContainer> {
    user_memory(version, kind).map(|bytes| {
        let size = version
            .and_then(|v| layout::layout_for(v.storage_size))
            .map_or((bytes / 8) as u8, |l| l.cc_size);
        CapabilityContainer::formatted(size)
    })
}
