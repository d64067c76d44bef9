pub mod photo_server;
