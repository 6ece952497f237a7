use tagsmith::Error;
use tagsmith::coordinator::{ArmSource, Coordinator, CoordinatorState};
use tagsmith::ndef::{Record, TagContent};
use tagsmith::test_support;

fn arm(coordinator: &mut Coordinator, source: ArmSource) -> tagsmith::Result<()> {
    match source {
        ArmSource::Compose => coordinator.arm_write(TagContent::single(Record::uri("https://a.b"))),
        ArmSource::Clone => coordinator.arm_clone(),
        ArmSource::UidInput => coordinator.arm_write_uid("04A1B2C3D4E5F6"),
        ArmSource::LastUid => coordinator.arm_write_last_uid(),
        ArmSource::Lock => coordinator.arm_lock(),
        ArmSource::SetPassword => coordinator.arm_set_password("1234"),
        ArmSource::RemovePassword => coordinator.arm_remove_password("1234"),
    }
}

const ALL: [ArmSource; 7] = [
    ArmSource::Compose,
    ArmSource::Clone,
    ArmSource::UidInput,
    ArmSource::LastUid,
    ArmSource::Lock,
    ArmSource::SetPassword,
    ArmSource::RemovePassword,
];

/// Coordinator with a cached read and a last UID, so every entry point can arm.
fn primed() -> anyhow::Result<Coordinator> {
    let mut coordinator = Coordinator::new();
    let mut tag = test_support::ntag215_with_text("cached")?;
    coordinator.on_tag(&mut tag);
    assert!(coordinator.cached_content().is_some());
    assert!(coordinator.last_uid().is_some());
    Ok(coordinator)
}

#[test]
fn any_second_arm_is_busy() -> anyhow::Result<()> {
    for first in ALL {
        for second in ALL {
            let mut coordinator = primed()?;
            arm(&mut coordinator, first)?;
            let state = coordinator.state();
            assert!(
                matches!(arm(&mut coordinator, second), Err(Error::Busy)),
                "{} then {}",
                first,
                second
            );
            assert_eq!(coordinator.state(), state);
            assert_eq!(coordinator.owner(), Some(first));
        }
    }
    Ok(())
}

#[test]
fn cancel_from_any_state_returns_to_read() -> anyhow::Result<()> {
    for source in ALL {
        let mut coordinator = primed()?;
        arm(&mut coordinator, source)?;
        coordinator.cancel();
        assert_eq!(coordinator.state(), CoordinatorState::ArmedRead);
        assert_eq!(coordinator.owner(), None);
    }
    Ok(())
}

#[test]
fn only_the_owner_may_cancel() -> anyhow::Result<()> {
    let mut coordinator = primed()?;
    coordinator.arm_write_last_uid()?;
    assert!(matches!(
        coordinator.cancel_from(ArmSource::UidInput),
        Err(Error::Busy)
    ));
    assert!(matches!(
        coordinator.arm_write_uid("01020304"),
        Err(Error::Busy)
    ));
    coordinator.cancel_from(ArmSource::LastUid)?;
    assert_eq!(coordinator.state(), CoordinatorState::ArmedRead);
    coordinator.arm_write_uid("01020304")?;
    assert_eq!(coordinator.owner(), Some(ArmSource::UidInput));
    Ok(())
}
