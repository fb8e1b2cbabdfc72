use crate::test::{
    advance_ledger, create_default_auction, set_ledger_time, setup_test, STARTING_BALANCE,
};
use crate::{AuctionStatus, Error};

#[test]
fn test_trade_unknown_auction() {
    let (_env, client, _, _, _, _) = setup_test();
    assert_eq!(client.try_trade(&4), Err(Ok(Error::UnknownAuction)));
}

#[test]
fn test_trade() {
    let (env, client, seller, buyer1, buyer2, token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &seller);

    client.create_offer(&buyer1, &auction_id, &20);
    client.create_offer(&buyer2, &auction_id, &30);
    advance_ledger(&env, 86_402);

    client.trade(&auction_id);

    let auction = client.get_auction(&auction_id);
    assert!(auction.ended);
    assert_eq!(client.get_status(&auction_id), AuctionStatus::Settled);
    assert_eq!(token.balance(&seller), 30);
    assert_eq!(token.balance(&buyer1), STARTING_BALANCE);
    assert_eq!(token.balance(&buyer2), STARTING_BALANCE - 30);
    assert_eq!(token.balance(&client.address), 0);
    assert_eq!(client.get_custody(&auction_id), 0);
    // The winning offer stays on record.
    assert_eq!(client.get_best_offer(&auction_id).unwrap().buyer, buyer2);
}

#[test]
fn test_trade_before_deadline_fails() {
    let (env, client, seller, buyer1, _, token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &seller);
    client.create_offer(&buyer1, &auction_id, &20);

    assert_eq!(
        client.try_trade(&auction_id),
        Err(Ok(Error::AuctionNotYetExpired))
    );

    let deadline = client.get_auction(&auction_id).deadline;
    set_ledger_time(&env, deadline - 1);
    assert_eq!(
        client.try_trade(&auction_id),
        Err(Ok(Error::AuctionNotYetExpired))
    );
    assert!(!client.get_auction(&auction_id).ended);
    assert_eq!(token.balance(&seller), 0);
}

#[test]
fn test_trade_at_deadline() {
    let (env, client, seller, buyer1, _, token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &seller);
    client.create_offer(&buyer1, &auction_id, &20);

    set_ledger_time(&env, client.get_auction(&auction_id).deadline);
    // Still open for offers at the deadline, and already tradeable.
    assert_eq!(client.get_status(&auction_id), AuctionStatus::Open);
    client.trade(&auction_id);

    assert_eq!(token.balance(&seller), 20);
    assert!(client.get_auction(&auction_id).ended);
    assert_eq!(client.get_status(&auction_id), AuctionStatus::Settled);
}

#[test]
fn test_trade_after_deadline() {
    let (env, client, seller, buyer1, _, token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &seller);
    client.create_offer(&buyer1, &auction_id, &20);

    let deadline = client.get_auction(&auction_id).deadline;
    set_ledger_time(&env, deadline + 1);
    assert_eq!(client.get_status(&auction_id), AuctionStatus::Expired);
    client.trade(&auction_id);

    assert_eq!(token.balance(&seller), 20);
}

#[test]
fn test_trade_twice_fails() {
    let (env, client, seller, buyer1, _, token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &seller);
    client.create_offer(&buyer1, &auction_id, &20);
    advance_ledger(&env, 86_402);

    client.trade(&auction_id);
    assert_eq!(client.try_trade(&auction_id), Err(Ok(Error::AlreadySettled)));
    assert_eq!(token.balance(&seller), 20);
}

#[test]
fn test_no_offer_after_trade_at_deadline() {
    let (env, client, seller, buyer1, buyer2, _) = setup_test();
    let auction_id = create_default_auction(&env, &client, &seller);
    client.create_offer(&buyer1, &auction_id, &20);

    set_ledger_time(&env, client.get_auction(&auction_id).deadline);
    client.trade(&auction_id);

    assert_eq!(
        client.try_create_offer(&buyer2, &auction_id, &50),
        Err(Ok(Error::AuctionExpired))
    );
}

#[test]
fn test_trade_without_offers() {
    let (env, client, seller, _, _, token) = setup_test();
    let auction_id = create_default_auction(&env, &client, &seller);
    advance_ledger(&env, 86_402);

    client.trade(&auction_id);

    assert!(client.get_auction(&auction_id).ended);
    assert_eq!(client.get_best_offer(&auction_id), None);
    assert_eq!(token.balance(&seller), 0);
    assert_eq!(client.try_trade(&auction_id), Err(Ok(Error::AlreadySettled)));
}

#[test]
fn test_auctions_settle_independently() {
    let (env, client, seller, buyer1, buyer2, token) = setup_test();
    let first = create_default_auction(&env, &client, &seller);
    let second = create_default_auction(&env, &client, &seller);

    client.create_offer(&buyer1, &first, &20);
    client.create_offer(&buyer2, &second, &70);
    advance_ledger(&env, 86_402);

    client.trade(&first);
    assert_eq!(token.balance(&seller), 20);
    assert_eq!(client.get_custody(&second), 70);
    assert_eq!(token.balance(&client.address), 70);

    client.trade(&second);
    assert_eq!(token.balance(&seller), 90);
    assert_eq!(token.balance(&client.address), 0);
}
