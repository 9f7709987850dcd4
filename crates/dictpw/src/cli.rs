pub mod dictpw;
