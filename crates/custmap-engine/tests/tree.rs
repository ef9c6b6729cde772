use custmap_engine::{CollapseState, Node, build, walk};
use custmap_testing::fixtures;
use custmap_types::NodeKind;

fn collect_keys(root: &Node<'_>) -> Vec<String> {
    let mut keys = Vec::new();
    walk(root, &mut |node| keys.push(node.key.as_str().to_string()));
    keys
}

fn find<'n, 'a>(root: &'n Node<'a>, key: &str) -> &'n Node<'a> {
    let mut found = None;
    walk(root, &mut |node| {
        if node.key.as_str() == key {
            found = Some(node);
        }
    });
    found.unwrap_or_else(|| panic!("node not found: {}", key))
}

#[test]
fn building_twice_is_deterministic() {
    let scenario = fixtures::strategic_multi_country();
    let first = build(&scenario);
    let second = build(&scenario);
    assert_eq!(collect_keys(&first), collect_keys(&second));

    let mut depths_first = Vec::new();
    walk(&first, &mut |node| depths_first.push(node.depth));
    let mut depths_second = Vec::new();
    walk(&second, &mut |node| depths_second.push(node.depth));
    assert_eq!(depths_first, depths_second);
}

#[test]
fn strategic_multi_country_builds_global_root() {
    let scenario = fixtures::strategic_multi_country();
    let root = build(&scenario);

    assert_eq!(root.kind, NodeKind::GlobalCustomer);
    assert_eq!(root.key.as_str(), "GLOBAL_CUSTOMER:CUST-GLOB-1");
    assert_eq!(root.depth, 0);

    // Two country customers, then the primary customer's own root account.
    let kinds: Vec<NodeKind> = root.children.iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![NodeKind::Customer, NodeKind::Customer, NodeKind::Account]
    );
    let customers = root
        .children
        .iter()
        .filter(|c| c.kind == NodeKind::Customer)
        .count();
    assert_eq!(customers, 2);
}

#[test]
fn one_related_customer_keeps_a_customer_root() {
    let mut scenario = fixtures::strategic_multi_country();
    scenario.related_customers.truncate(1);
    let root = build(&scenario);
    assert_eq!(root.kind, NodeKind::Customer);
    assert_eq!(root.key.as_str(), "CUSTOMER:CUST-GLOB-1");
}

#[test]
fn non_strategic_customer_is_never_global() {
    let scenario = fixtures::relationship_single();
    let root = build(&scenario);
    assert_eq!(root.kind, NodeKind::Customer);
    // Related customers of a CUSTOMER root are not attached.
    assert!(root.children.iter().all(|c| c.kind == NodeKind::Account));
}

#[test]
fn account_children_attach_in_fixed_order() {
    let scenario = fixtures::strategic_multi_country();
    let root = build(&scenario);
    let account = find(&root, "ACCOUNT:ACC-GLOB-1");

    let kinds: Vec<NodeKind> = account.children.iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::Contact,
            NodeKind::Address,
            NodeKind::Platform,
            NodeKind::Contract,
        ]
    );

    let contract = &account.children[3];
    let contract_kinds: Vec<NodeKind> = contract.children.iter().map(|c| c.kind).collect();
    assert_eq!(
        contract_kinds,
        vec![NodeKind::Billing, NodeKind::Contact, NodeKind::Address]
    );
}

#[test]
fn child_accounts_append_last_and_nest() {
    let scenario = fixtures::strategic_multi_country();
    let root = build(&scenario);
    let parent = find(&root, "ACCOUNT:ACC-DE-1");
    let last = parent.children.last().expect("child account attached");
    assert_eq!(last.kind, NodeKind::Account);
    assert_eq!(last.key.as_str(), "ACCOUNT:ACC-DE-2");
    assert_eq!(last.depth, parent.depth + 1);
}

#[test]
fn attached_children_carry_parent_scoped_keys() {
    let scenario = fixtures::strategic_multi_country();
    let root = build(&scenario);
    assert_eq!(
        find(&root, "CONTACT:CP-1@ACCOUNT:ACC-GLOB-1#0").kind,
        NodeKind::Contact
    );
    assert_eq!(
        find(&root, "CONTRACT:CON-1@ACCOUNT:ACC-GLOB-1#0").kind,
        NodeKind::Contract
    );
    assert_eq!(
        find(&root, "BILLING:BPROF-CON-1@CONTRACT:CON-1@ACCOUNT:ACC-GLOB-1#0#0").kind,
        NodeKind::Billing
    );
}

#[test]
fn idless_contacts_still_get_distinct_keys() {
    let scenario = fixtures::anonymous_contacts();
    let root = build(&scenario);

    let mut contact_keys = Vec::new();
    walk(&root, &mut |node| {
        if node.kind == NodeKind::Contact {
            contact_keys.push(node.key.as_str().to_string());
        }
    });

    assert_eq!(contact_keys.len(), 2);
    assert_ne!(contact_keys[0], contact_keys[1]);
    assert!(contact_keys.iter().all(|key| key.contains("__NOID__")));
}

#[test]
fn keys_are_unique_within_a_tree() {
    let scenario = fixtures::strategic_multi_country();
    let root = build(&scenario);
    let mut keys = collect_keys(&root);
    let total = keys.len();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), total);
}

#[test]
fn bare_account_is_not_collapsible() {
    let scenario = fixtures::bare_account();
    let root = build(&scenario);
    let account = find(&root, "ACCOUNT:ACC-BARE-1");
    assert!(!account.has_children_original);
    assert_eq!(account.depth, 1);
    assert!(root.has_children_original);
}

#[test]
fn missing_display_fields_fall_back_to_placeholders() {
    let scenario = fixtures::bare_account();
    let root = build(&scenario);
    let account = find(&root, "ACCOUNT:ACC-BARE-1");
    assert_eq!(account.line1, "roles: —");
    assert_eq!(account.line2, "channel: —");
}

#[test]
fn collapse_apply_is_idempotent() {
    let scenario = fixtures::strategic_multi_country();
    let mut collapse = CollapseState::new();
    collapse.toggle(custmap_engine::NodeKey::new("ACCOUNT:ACC-GLOB-1"));

    let mut once = build(&scenario);
    collapse.apply(&mut once);
    let after_once = collect_keys(&once);

    collapse.apply(&mut once);
    assert_eq!(collect_keys(&once), after_once);
}

#[test]
fn collapse_round_trips_the_subtree() {
    let scenario = fixtures::strategic_multi_country();
    let mut root = build(&scenario);
    let pristine = collect_keys(&root);

    let key = custmap_engine::NodeKey::new("ACCOUNT:ACC-GLOB-1");
    let mut collapse = CollapseState::new();
    assert!(collapse.toggle(key.clone()));
    collapse.apply(&mut root);

    {
        let account = find(&root, "ACCOUNT:ACC-GLOB-1");
        assert!(account.children.is_empty());
        assert!(account.collapsed_children.is_some());
        assert!(account.has_children_original);
    }
    assert!(collect_keys(&root).len() < pristine.len());

    assert!(!collapse.toggle(key));
    collapse.apply(&mut root);
    assert_eq!(collect_keys(&root), pristine);
    let account = find(&root, "ACCOUNT:ACC-GLOB-1");
    assert!(account.collapsed_children.is_none());
}

#[test]
fn collapse_all_spares_the_root() {
    let scenario = fixtures::strategic_multi_country();
    let mut collapse = CollapseState::new();
    collapse.collapse_all(&scenario);

    let root = build(&scenario);
    assert!(!collapse.is_collapsed(&root.key));

    // Every collapsible non-root node is in the set.
    walk(&root, &mut |node| {
        if node.depth >= 1 && node.has_children_original {
            assert!(collapse.is_collapsed(&node.key), "missing: {}", node.key);
        }
    });

    let mut collapsed_tree = build(&scenario);
    collapse.apply(&mut collapsed_tree);
    // Only the root and its direct children stay visible.
    assert_eq!(collect_keys(&collapsed_tree).len(), 1 + root.children.len());
}

#[test]
fn expand_all_restores_everything() {
    let scenario = fixtures::strategic_multi_country();
    let mut collapse = CollapseState::new();
    collapse.collapse_all(&scenario);

    let mut root = build(&scenario);
    collapse.apply(&mut root);

    collapse.clear();
    collapse.apply(&mut root);
    assert_eq!(collect_keys(&root), collect_keys(&build(&scenario)));
}
