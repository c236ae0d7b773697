pub mod shared {
    pub mod infrastructure {
        pub mod record_store;
    }
}

pub mod modules {
    pub mod loyalty_history {
        pub mod core {
            pub mod history;
            pub mod mutation;
            pub mod records;
            pub mod tables;
            pub mod timestamp;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod record_point_event {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod record_transaction {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod fetch_combined_history {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_record {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_record {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
