mod common;

use axum::extract::{Path, State};
use retail_backoffice::routes::lookups;

#[tokio::test]
async fn lookup_by_category_returns_code_description_pairs() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let response = lookups::lookup_by_category(State(state.clone()), Path("STATUS".into())).await?;
    let options = response.0.data.expect("dropdown");
    assert_eq!(options.len(), 2);
    assert_eq!(options.options[0].value, "STATUS.ACTIVE");
    assert_eq!(options.options[0].label, "Active");
    assert_eq!(response.0.meta.and_then(|m| m.total), Some(2));

    let unknown = lookups::lookup_by_category(State(state), Path("NOPE".into())).await?;
    assert!(unknown.0.data.expect("dropdown").is_empty());
    Ok(())
}

#[tokio::test]
async fn active_units_exclude_inactive_rows() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let response = lookups::active_units(State(state)).await?;
    let units = response.0.data.expect("dropdown");
    assert_eq!(units.len(), 5);
    assert!(units.options.iter().all(|o| o.label != "Dozen"));
    // ordered by name
    assert_eq!(units.options[0].label, "Box");
    assert_eq!(units.options[0].value, "2");
    Ok(())
}
