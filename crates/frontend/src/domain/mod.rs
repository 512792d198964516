pub mod a001_client;
pub mod a002_staff_grade;
pub mod a003_staff;
pub mod a004_campaign_manager;
pub mod a005_campaign;
pub mod a006_advert;
