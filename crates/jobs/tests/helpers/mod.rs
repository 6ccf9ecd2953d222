pub mod mock_collector;
