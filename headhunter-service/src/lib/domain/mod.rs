pub mod headhunter;
