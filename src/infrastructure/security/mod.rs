pub mod session_gateway;
