//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버와 폼 클라이언트의 시작 배너에 쓰이는 출력 함수들입니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// 텍스트는 자동으로 중앙 정렬됩니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║          📝 USER FORM SUBMISSION SERVICE         ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

/// 들여쓰기된 트리 구조로 설정 항목 하나를 출력합니다
///
/// ```text
///    ├─ Bind: 0.0.0.0:8000
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("{}", sub_task_line(name, status));
}

fn boxed_title(title: &str) -> String {
    // 고정 너비 50칸 (박스 내부 콘텐츠)
    let border = "═".repeat(50);
    format!("╔{border}╗\n║{:^49}║\n╚{border}╝", title)
}

fn sub_task_line(name: &str, status: &str) -> String {
    format!("   ├─ {}: {}", name, status)
}
