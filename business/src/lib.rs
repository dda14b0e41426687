pub mod application {
    pub mod outfit {
        pub mod generate;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod catalog {
        pub mod model;
        pub mod repository;
        pub mod value_objects;
    }
    pub mod outfit {
        pub mod errors;
        pub mod model;
        pub mod narrative;
        pub mod queries;
        pub mod ranking;
        pub mod rules;
        pub mod selection;
        pub mod use_cases {
            pub mod generate;
        }
    }
    pub mod shared {
        pub mod text;
        pub mod value_objects;
    }
}
