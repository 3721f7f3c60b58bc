use crate::common::*;

#[doc = r#"
    전역 로거를 설정해주는 함수.

    `logs` 디렉토리 하위에 일 단위로 로테이션 되는 로그 파일을 남기고,
    같은 내용을 stdout 에도 복제한다. 반환되는 핸들은 프로그램 종료 시점까지
    유지되어야 하므로 호출 측(main)에서 보관한다.
"#]
pub fn set_global_logger() -> LoggerHandle {
    Logger::try_with_str("info")
        .expect("Failed to initialize logger")
        .log_to_file(
            FileSpec::default()
                .directory("logs")
                .basename("chart_drive_uploader"),
        )
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(10),
        )
        .duplicate_to_stdout(Duplicate::All)
        .format_for_files(custom_format)
        .format_for_stdout(custom_format)
        .start()
        .expect("Failed to start logger")
}

#[doc = "로그 출력 포맷: [시각] [레벨] 메시지"]
fn custom_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        &record.args()
    )
}
