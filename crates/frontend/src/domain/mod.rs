pub mod diaries;
