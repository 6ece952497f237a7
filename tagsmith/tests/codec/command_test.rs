use tagsmith::protocol::{Command, Response, bcc0, bcc1};
use tagsmith::types::Password;

#[test]
fn page_commands_encode() {
    assert_eq!(Command::GetVersion.encode(), vec![0x60]);
    assert_eq!(Command::Read { address: 4 }.encode(), vec![0x30, 0x04]);
    assert_eq!(
        Command::WritePage {
            page: 41,
            data: [1, 2, 3, 4]
        }
        .encode(),
        vec![0xA2, 41, 1, 2, 3, 4]
    );
    let password = Password::new("1234").unwrap_or(Password::from_bytes([0; 4]));
    assert_eq!(
        Command::PwdAuth { password }.encode(),
        vec![0x1B, 0x31, 0x32, 0x33, 0x34]
    );
}

#[test]
fn version_reply_decodes() {
    let reply = [0x00, 0x04, 0x04, 0x02, 0x01, 0x00, 0x11, 0x03];
    match Response::decode(0x60, &reply) {
        Ok(Response::Version(v)) => {
            assert!(v.is_nxp());
            assert_eq!(v.storage_size, 0x11);
        }
        other => panic!("expected version, got {:?}", other),
    }
}

#[test]
fn nak_is_an_error() {
    assert!(Response::decode(0xA2, &[0x00]).is_err());
    assert!(Response::decode(0x30, &[0x04]).is_err());
    assert!(matches!(Response::decode(0xA2, &[0x0A]), Ok(Response::Ack)));
}

#[test]
fn identifier_checksums() {
    let uid = [0x07, 0xA1, 0xB2, 0xC3, 0xD4, 0xE5, 0xF6];
    assert_eq!(bcc0(&uid), 0x88 ^ 0x07 ^ 0xA1 ^ 0xB2);
    assert_eq!(bcc1(&uid), 0xC3 ^ 0xD4 ^ 0xE5 ^ 0xF6);
}
