use axum::{
    extract::{Path, State},
    response::Redirect,
    Form,
};
use chrono::Utc;

use crate::dashboard::ActiveView;
use crate::fleet::WaypointDraft;
use crate::web::api::error::ApiResult;
use crate::web::state::AppState;

use super::templates::DashboardTemplate;

pub async fn dashboard(State(state): State<AppState>) -> DashboardTemplate {
    let refresh_secs = state.config.simulation.telemetry_interval.as_secs().max(1);
    let mut dashboard = state.dashboard.lock().await;
    DashboardTemplate::from_state(&mut dashboard, refresh_secs, Utc::now())
}

pub async fn select_drone(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Redirect> {
    state.dashboard.lock().await.select_drone(Some(&id))?;
    Ok(Redirect::to("/"))
}

pub async fn clear_selection(State(state): State<AppState>) -> ApiResult<Redirect> {
    state.dashboard.lock().await.select_drone(None)?;
    Ok(Redirect::to("/"))
}

pub async fn set_view(State(state): State<AppState>, Path(view): Path<ActiveView>) -> Redirect {
    state.dashboard.lock().await.set_view(view);
    Redirect::to("/")
}

pub async fn toggle_mission(State(state): State<AppState>) -> Redirect {
    let status = state.dashboard.lock().await.toggle_operation();
    log::info!("Operation status changed to {}", status);
    Redirect::to("/")
}

pub async fn toggle_sound(State(state): State<AppState>) -> Redirect {
    let enabled = state.dashboard.lock().await.toggle_sound();
    log::debug!("Alert sound enabled: {}", enabled);
    Redirect::to("/")
}

pub async fn add_waypoint(
    State(state): State<AppState>,
    Form(draft): Form<WaypointDraft>,
) -> Redirect {
    if !state.dashboard.lock().await.add_waypoint(&draft) {
        log::debug!("Ignored incomplete waypoint draft");
    }
    Redirect::to("/")
}

pub async fn delete_waypoint(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Redirect> {
    state.dashboard.lock().await.remove_waypoint(&id)?;
    Ok(Redirect::to("/"))
}

pub async fn acknowledge_alert(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Redirect> {
    state.dashboard.lock().await.acknowledge_alert(&id)?;
    Ok(Redirect::to("/"))
}

pub async fn dismiss_alert(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Redirect> {
    state.dashboard.lock().await.dismiss_alert(&id)?;
    Ok(Redirect::to("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use askama::Template;
    use crate::web::api::test_state;

    #[tokio::test]
    async fn renders_fleet_and_alerts() {
        let html = dashboard(State(test_state())).await.render().unwrap();
        assert!(html.contains("Alpha Leader"));
        assert!(html.contains("Communication Lost"));
        assert!(html.contains("Rescue Alpha"));
    }

    #[tokio::test]
    async fn selection_shows_detail_panel() {
        let state = test_state();
        let _redirect = select_drone(State(state.clone()), Path("DR-001".into()))
            .await
            .ok()
            .unwrap();
        let template = dashboard(State(state)).await;
        let panel = template.selected.as_ref().unwrap();
        assert_eq!(panel.name, "Alpha Leader");
        assert_eq!(panel.latitude, "37°46'29.64\"N");
        assert!(template.drones[0].selected);
        assert!(template.render().unwrap().contains("Flight time"));
    }

    #[tokio::test]
    async fn gps_view_switch() {
        let state = test_state();
        let _redirect = set_view(State(state.clone()), Path(ActiveView::Gps)).await;
        let template = dashboard(State(state)).await;
        assert!(template.gps_view);
        assert_eq!(template.gps.fix, "3D");
        assert!(template.render().unwrap().contains("Add waypoint"));
    }

    #[tokio::test]
    async fn form_waypoint_is_appended() {
        let state = test_state();
        let draft = WaypointDraft {
            name: "Zone X".into(),
            lat: "10.0".into(),
            lng: "20.0".into(),
            ..Default::default()
        };
        let _redirect = add_waypoint(State(state.clone()), Form(draft)).await;
        let template = dashboard(State(state)).await;
        assert_eq!(template.waypoints.len(), 4);
        assert_eq!(template.waypoints[3].altitude, "150 m");
        // Order 4 has no predecessor at order 3, so no new leg.
        assert_eq!(template.route.len(), 2);
    }

    #[tokio::test]
    async fn mission_toggle_pauses_operation() {
        let state = test_state();
        let _redirect = toggle_mission(State(state.clone())).await;
        let template = dashboard(State(state)).await;
        assert!(!template.operation_running);
        assert_eq!(template.operation, "paused");
    }

    #[tokio::test]
    async fn map_view_omits_waypoint_editor() {
        let html = dashboard(State(test_state())).await.render().unwrap();
        assert!(html.contains("Search Zone Alpha"));
        assert!(!html.contains("Add waypoint"));
    }

    #[tokio::test]
    async fn alert_footer_counts_by_type() {
        let state = test_state();
        let template = dashboard(State(state.clone())).await;
        assert_eq!(template.critical_alerts, 1);
        assert_eq!(template.warning_alerts, 1);

        let _redirect = dismiss_alert(State(state.clone()), Path("ALT-004".into()))
            .await
            .ok()
            .unwrap();
        let template = dashboard(State(state)).await;
        assert_eq!(template.critical_alerts, 0);
        assert!(template.render().unwrap().contains("0 critical"));
    }

    #[tokio::test]
    async fn unknown_alert_is_rejected() {
        assert!(dismiss_alert(State(test_state()), Path("ALT-404".into()))
            .await
            .is_err());
    }
}
