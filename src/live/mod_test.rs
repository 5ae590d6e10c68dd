use super::*;

#[test]
fn broadcast_reaches_every_registered_member() {
    let live = LiveChannel::new();
    let (_, mut rx_a) = live.register();
    let (_, mut rx_b) = live.register();

    assert_eq!(live.broadcast_all("hello"), 2);
    assert_eq!(rx_a.try_recv().unwrap(), "hello");
    assert_eq!(rx_b.try_recv().unwrap(), "hello");
}

#[test]
fn unregistered_member_receives_nothing() {
    let live = LiveChannel::new();
    let (gone, mut rx_gone) = live.register();
    let (_, mut rx_stay) = live.register();

    live.unregister(gone);
    assert_eq!(live.broadcast_all("hello"), 1);
    assert!(rx_gone.try_recv().is_err());
    assert_eq!(rx_stay.try_recv().unwrap(), "hello");
}

#[test]
fn late_joiner_misses_earlier_broadcast() {
    let live = LiveChannel::new();
    assert_eq!(live.broadcast_all("early"), 0);

    let (_, mut rx) = live.register();
    assert!(rx.try_recv().is_err());

    live.broadcast_all("late");
    assert_eq!(rx.try_recv().unwrap(), "late");
}

#[test]
fn dropped_receiver_is_pruned() {
    let live = LiveChannel::new();
    let (_, rx) = live.register();
    let (_, _rx_keep) = live.register();
    drop(rx);

    assert_eq!(live.len(), 2);
    assert_eq!(live.broadcast_all("hello"), 1);
    assert_eq!(live.len(), 1);
}

#[test]
fn unregister_unknown_id_is_a_no_op() {
    let live = LiveChannel::new();
    let (_, _rx) = live.register();
    live.unregister(Uuid::nil());
    assert_eq!(live.len(), 1);
    assert!(!live.is_empty());
}

#[test]
fn clones_share_membership() {
    let live = LiveChannel::new();
    let other = live.clone();
    let (_, mut rx) = other.register();
    assert_eq!(live.broadcast_all("shared"), 1);
    assert_eq!(rx.try_recv().unwrap(), "shared");
}
