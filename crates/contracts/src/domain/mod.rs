pub mod diary;
