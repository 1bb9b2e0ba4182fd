use std::time::Duration;

use egui_kittest::Harness;
use members_business::MembersFetchState;
use members_ui::MembersApp;
use members_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// How long to wait between frames while the member list is in flight.
pub const DEFAULT_NETWORK_WAIT_MS: u64 = 50;

pub struct TestCtx<'a> {
    _mock_server: MockServer,
    harness: Harness<'a, MembersApp>,
}

impl<'a> TestCtx<'a> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, MembersApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, MembersApp> {
        &self.harness
    }

    /// App backed by a mock data source serving `count` members.
    pub async fn new_app(count: usize) -> Self {
        let response = ResponseTemplate::new(200).set_body_json(members_json(count));
        Self::new_app_with_response(response).await
    }

    #[allow(unused)]
    pub async fn new_app_with_status(status_code: u16) -> Self {
        Self::new_app_with_response(ResponseTemplate::new(status_code)).await
    }

    async fn new_app_with_response(response: ResponseTemplate) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/members.json"))
            .respond_with(response)
            .expect(1)
            .mount(&mock_server)
            .await;

        let state = State::test(format!("{}/members.json", mock_server.uri()));
        let harness = Harness::builder()
            .with_size(egui::vec2(1200.0, 900.0))
            .build_eframe(|cc| MembersApp::with_repaint(state, cc.egui_ctx.clone()));

        Self {
            _mock_server: mock_server,
            harness,
        }
    }

    /// Step frames until the fetch settles, then render once more.
    pub async fn wait_for_members(&mut self) {
        for _ in 0..50 {
            tokio::time::sleep(Duration::from_millis(DEFAULT_NETWORK_WAIT_MS)).await;
            self.harness.step();
            if !fetch_state(&self.harness).is_loading() {
                self.harness.step();
                return;
            }
        }
        panic!("member fetch did not complete within timeout");
    }
}

#[allow(unused)]
pub fn fetch_state<'h>(harness: &'h Harness<'_, MembersApp>) -> &'h MembersFetchState {
    harness.state().state.ctx.state::<MembersFetchState>()
}

/// `count` members named "Member 1".."Member {count}"; every fifth one is an admin.
pub fn members_json(count: usize) -> serde_json::Value {
    let members: Vec<serde_json::Value> = (1..=count)
        .map(|i| {
            serde_json::json!({
                "id": i.to_string(),
                "name": format!("Member {i}"),
                "email": format!("member{i}@mailinator.com"),
                "role": if i % 5 == 0 { "admin" } else { "member" },
            })
        })
        .collect();
    serde_json::Value::Array(members)
}
