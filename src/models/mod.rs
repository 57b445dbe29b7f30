pub mod linear_svm;

pub use linear_svm::LinearSvm;
