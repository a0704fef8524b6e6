pub mod http_server_mock;
pub mod mock_resolver;
