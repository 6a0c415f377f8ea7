pub mod flatten;

pub use flatten::FlattenDnstapUseCase;
