//! 터미널 출력 포맷팅 유틸리티
//!
//! 서비스 레지스트리 초기화 과정을 사람이 읽기 좋은 형태로 출력합니다.
//! 박스 제목, 단계 진행, 트리 형태의 서브 작업 표시를 제공하며
//! 구조화 로깅(`log`)과 별개로 기동 시점에만 사용됩니다.

/// Unicode 박스 문자로 둘러싼 제목을 출력합니다.
///
/// 제목은 박스 내부에서 중앙 정렬됩니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  System Started                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    // 박스 내부 고정 너비 50칸
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

/// 초기화 단계의 시작을 표시합니다.
///
/// ```text
/// → Step 1: Registering repositories
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 초기화 단계의 완료와 처리 건수를 표시합니다.
///
/// ```text
/// ✓ Step 1: Repositories registered (1 items)
/// ```
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 단계 하위의 개별 컴포넌트 상태를 트리 형태로 표시합니다.
///
/// ```text
///    ├─ UserRepository: OK
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 레지스트리 초기화가 끝난 뒤 전체 컴포넌트 요약을 출력합니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║           🎉 SERVICE REGISTRY INITIALIZED        ║
/// ╚══════════════════════════════════════════════════╝
///    📦 Repositories: 1
///    🔧 Services: 5
///    🚀 Total Components: 6
/// ```
pub fn print_final_summary(repos: usize, services: usize) {
    let total = repos + services;
    println!();
    print_boxed_title("🎉 SERVICE REGISTRY INITIALIZED");
    println!("   📦 Repositories: {}", repos);
    println!("   🔧 Services: {}", services);
    println!("   🚀 Total Components: {}", total);
    println!();
}

/// 캐시 계층 초기화 결과를 서브 작업 형태로 표시합니다.
///
/// ```text
///    ├─ Redis Cache: 0 entries loaded
/// ```
pub fn print_cache_initialized(cache_type: &str, count: usize) {
    println!("   ├─ {} Cache: {} entries loaded", cache_type, count);
}
