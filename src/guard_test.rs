use super::*;

use crate::net::types::User;

fn alice() -> User {
    User {
        id: 1,
        username: "alice".into(),
        email: "alice@example.com".into(),
        role: "manager".into(),
        first_name: Some("Alice".into()),
        last_name: Some("Anders".into()),
        status: "active".into(),
    }
}

// =============================================================================
// evaluate — state table
// =============================================================================

#[test]
fn initializing_shows_loading_regardless_of_route() {
    let guard = RouteGuard::new();
    let session = Session::initializing();

    for route in ["/dashboard", "/login", "/properties/42", "/"] {
        assert_eq!(guard.evaluate(&session, route), GuardDecision::Loading, "route {route}");
    }
}

#[test]
fn ready_public_routes_render_without_authentication() {
    let guard = RouteGuard::new();
    let session = Session::ready_unauthenticated();

    for route in PUBLIC_ROUTES {
        assert_eq!(guard.evaluate(&session, route), GuardDecision::Render, "route {route}");
    }
}

#[test]
fn ready_authenticated_renders_requested_view() {
    let guard = RouteGuard::new();
    let session = Session::ready_authenticated(alice(), "abc");

    for route in ["/dashboard", "/properties/42", "/login", "/"] {
        assert_eq!(guard.evaluate(&session, route), GuardDecision::Render, "route {route}");
    }
}

#[test]
fn ready_unauthenticated_private_route_redirects_to_login() {
    let guard = RouteGuard::new();
    let session = Session::ready_unauthenticated();

    let decision = guard.evaluate(&session, "/dashboard");

    // The requested view must not render synchronously; the redirect is a
    // deferred command for the host's after-update hook.
    assert_ne!(decision, GuardDecision::Render);
    assert_eq!(decision, GuardDecision::Redirect(NavigationCommand::to_login()));
}

#[test]
fn root_route_is_private() {
    let guard = RouteGuard::new();
    let session = Session::ready_unauthenticated();

    assert_eq!(
        guard.evaluate(&session, "/"),
        GuardDecision::Redirect(NavigationCommand::to_login())
    );
}

// =============================================================================
// evaluate — route normalization
// =============================================================================

#[test]
fn trailing_slash_matches_allow_list() {
    let guard = RouteGuard::new();
    let session = Session::ready_unauthenticated();

    assert_eq!(guard.evaluate(&session, "/login/"), GuardDecision::Render);
}

#[test]
fn query_string_is_ignored_for_matching() {
    let guard = RouteGuard::new();
    let session = Session::ready_unauthenticated();

    assert_eq!(guard.evaluate(&session, "/login?next=%2Fdashboard"), GuardDecision::Render);
    assert_eq!(
        guard.evaluate(&session, "/dashboard?tab=leases"),
        GuardDecision::Redirect(NavigationCommand::to_login())
    );
}

#[test]
fn fragment_is_ignored_for_matching() {
    let guard = RouteGuard::new();
    let session = Session::ready_unauthenticated();

    assert_eq!(guard.evaluate(&session, "/register#terms"), GuardDecision::Render);
}

#[test]
fn prefix_of_public_route_is_not_public() {
    let guard = RouteGuard::new();
    let session = Session::ready_unauthenticated();

    assert_eq!(
        guard.evaluate(&session, "/login/audit"),
        GuardDecision::Redirect(NavigationCommand::to_login())
    );
}

// =============================================================================
// custom allow-list
// =============================================================================

#[test]
fn custom_allow_list_replaces_default() {
    let guard = RouteGuard::with_public_routes(["/signin", "/forgot/"]);
    let session = Session::ready_unauthenticated();

    assert_eq!(guard.evaluate(&session, "/signin"), GuardDecision::Render);
    assert_eq!(guard.evaluate(&session, "/forgot"), GuardDecision::Render);
    assert_eq!(
        guard.evaluate(&session, "/login"),
        GuardDecision::Redirect(NavigationCommand::to_login())
    );
}

// =============================================================================
// NavigationQueue
// =============================================================================

#[test]
fn queue_starts_empty() {
    assert!(NavigationQueue::new().is_empty());
}

#[test]
fn queue_drains_in_push_order_and_empties() {
    let mut queue = NavigationQueue::new();
    queue.push(NavigationCommand::to_login());
    queue.push(NavigationCommand { to: "/dashboard".into() });

    let drained = queue.drain();

    assert_eq!(drained.len(), 2);
    assert_eq!(drained[0].to, "/login");
    assert_eq!(drained[1].to, "/dashboard");
    assert!(queue.is_empty());
}

#[test]
fn drain_on_empty_queue_returns_nothing() {
    let mut queue = NavigationQueue::new();
    assert!(queue.drain().is_empty());
}
