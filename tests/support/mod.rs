#![allow(dead_code)]
use mockall::mock;
use sc4_cpu_priority::PriorityClass;
use sc4_cpu_priority::service::PrioritySetter;
use std::io;

mock! {
    pub Setter {}

    impl PrioritySetter for Setter {
        fn set_priority_class(&self, class: PriorityClass) -> io::Result<()>;
    }
}

/// Setter that expects no call at all.
pub fn untouched() -> MockSetter {
    let mut setter = MockSetter::new();
    setter.expect_set_priority_class().never();
    setter
}

/// Setter that accepts exactly one call and fails it with `message`.
pub fn failing(message: &'static str) -> MockSetter {
    let mut setter = MockSetter::new();
    setter
        .expect_set_priority_class()
        .times(1)
        .returning(move |_| Err(io::Error::other(message)));
    setter
}
