#![allow(non_snake_case)]

use denselu::{algebra::*, io::ConfigurablePrintTarget};

fn test_print_solver() -> LuSolver<f64> {
    let settings = LuSettingsBuilder::default().verbose(true).build().unwrap();
    LuSolver::new(settings).unwrap()
}

fn test_print_matrix() -> SquareMatrix<f64> {
    SquareMatrix::from(&[[4., 3.], [6., 3.]])
}

#[test]
fn test_print_to_stdout() {
    let mut solver = test_print_solver();
    solver.print_to_stdout();
    solver.inverse(&test_print_matrix()).unwrap();
}

#[test]
fn test_print_to_buffer() {
    let mut solver = test_print_solver();
    solver.print_to_buffer();
    solver.condition_num(&test_print_matrix()).unwrap();
    let result = solver.get_print_buffer().unwrap();
    assert!(result.contains("denselu v"));
    assert!(result.contains("size          = 2"));
    assert!(result.contains("cond (1-norm) = 1.500e1"));
}

#[test]
fn test_print_to_file() {
    use std::io::{Read, Seek};

    let mut solver = test_print_solver();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    solver.print_to_file(file.into_file());
    solver.inverse(&test_print_matrix()).unwrap();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("denselu v"));
}

#[test]
fn test_print_to_stream() {
    use std::io::{Read, Seek};

    let mut solver = test_print_solver();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    let stream = Box::new(file.into_file());

    solver.print_to_stream(stream);
    solver.inverse(&test_print_matrix()).unwrap();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("pivot order"));
}

#[test]
fn test_print_to_sink() {
    let mut solver = test_print_solver();
    solver.print_to_sink();
    solver.inverse(&test_print_matrix()).unwrap();
    assert!(solver.get_print_buffer().is_err());
}

#[test]
fn test_print_errors_do_not_mask_results() {
    // a broken output stream must not turn a good factorization into an error
    struct Broken;
    impl std::io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "broken"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let mut solver = test_print_solver();
    solver.print_to_stream(Box::new(Broken));
    assert!(solver.inverse(&test_print_matrix()).is_ok());
}
