pub mod dashboard;
pub mod hangul_grid;
pub mod lesson_detail;
pub mod lessons;
pub mod login;
pub mod mock_exam;
pub mod progress;
pub mod quiz;
pub mod quiz_results;
pub mod settings;
pub mod splash;
pub mod vocabulary;
pub mod welcome;
pub mod word_detail;
pub mod word_list;
