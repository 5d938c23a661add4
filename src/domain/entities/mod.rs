//! # Domain Entities Module
//!
//! `users` 테이블과 1:1로 대응되는 엔티티를 정의합니다.
//!
//! ```text
//! users
//! ├── id          BIGINT UNSIGNED AUTO_INCREMENT PRIMARY KEY
//! ├── name        VARCHAR(255)   (공백 제거된 값)
//! ├── department  VARCHAR(255)   (공백 제거된 값)
//! ├── mobile      CHAR(10)       (숫자 10자리, 입력 그대로)
//! └── checked     TINYINT        (0 / 1)
//! ```
//!
//! 행은 삽입 경로로만 생성되며 수정/삭제 경로는 존재하지 않습니다.

pub mod users;
