/*
Author      : Seunghwan Shin
Create date : 2025-10-00
Description : 차트 이미지를 생성해서 Google Drive 에 업로드 해주는 프로그램

History     : 2025-10-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod repository;
use repository::drive_repository_impl::*;

mod env_configuration;
use env_configuration::env_config::*;

mod traits;

mod model;
use model::configs::total_config::*;

mod utils_modules;
use utils_modules::logger_utils::*;

mod dto;

mod service;
use service::{auth_service_impl::*, chart_service_impl::*, credential_service_impl::*};

mod controller;
use controller::main_controller::*;

#[tokio::main]
async fn main() {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    let _logger_guard: LoggerHandle = set_global_logger();

    info!("Chart upload program start!");

    /* 필수 환경변수 검증 - 네트워크 작업 이전에 먼저 수행한다. */
    let credential_env: CredentialEnv = CredentialEnv::from_env().unwrap_or_else(|e| {
        let err_msg: &str = "[main] Required credential configuration is missing or invalid.";
        error!("{} {:?}", err_msg, e);
        panic!("{} {:?}", err_msg, e)
    });

    let total_config: TotalConfig = TotalConfig::load().unwrap_or_else(|e| {
        let err_msg: &str = "[main] An issue occurred while loading the server configuration.";
        error!("{} {:?}", err_msg, e);
        panic!("{} {:?}", err_msg, e)
    });

    let http_client: Client = Client::builder()
        .timeout(Duration::from_secs(*total_config.system().http_timeout_sec()))
        .build()
        .unwrap_or_else(|e| {
            let err_msg: &str = "[main] An issue occurred while initializing the HTTP client.";
            error!("{} {:?}", err_msg, e);
            panic!("{} {:?}", err_msg, e)
        });

    /* 의존 주입 */
    let chart_service: ChartServiceImpl = ChartServiceImpl::new();
    let credential_service: CredentialServiceImpl = CredentialServiceImpl::new();
    let auth_service: AuthServiceImpl = AuthServiceImpl::new(http_client.clone());
    let drive_repository: DriveRepositoryImpl = DriveRepositoryImpl::new(http_client);

    let main_controller: MainController<
        ChartServiceImpl,
        CredentialServiceImpl,
        AuthServiceImpl,
        DriveRepositoryImpl,
    > = MainController::new(
        chart_service,
        credential_service,
        auth_service,
        drive_repository,
        credential_env,
        total_config,
    );

    main_controller.main_task().await.unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });

    info!("Chart upload program end!");
}
