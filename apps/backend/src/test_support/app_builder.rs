//! Test service builder.
//! Given an AppState, build an initialized Actix **test service** wrapped in
//! the same middleware stack `main.rs` uses.

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::Error as ActixError;
use actix_web::{web, App};

use crate::middleware::{PermissiveCors, RequestTrace, StructuredLogger, TraceSpan};
use crate::state::app_state::AppState;

pub fn create_test_app(state: AppState) -> TestAppBuilder {
    TestAppBuilder { state }
}

pub struct TestAppBuilder {
    state: AppState,
}

impl TestAppBuilder {
    /// Build and initialize the Actix test service.
    pub async fn build(
        self,
    ) -> impl Service<
        actix_http::Request,
        Response = ServiceResponse<impl MessageBody>,
        Error = ActixError,
    > {
        let app = App::new()
            .wrap(PermissiveCors)
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(web::Data::new(self.state))
            .configure(crate::routes::configure);

        actix_web::test::init_service(app).await
    }
}
