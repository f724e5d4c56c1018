use serde::{de::DeserializeOwned, Serialize};
use std::io::Write;
use std::{fs::File, io, io::Read};

/// JSON file I/O for any serializable vector, matrix or settings object.
///
/// Deserialization validates the loaded data, so a matrix whose element
/// count disagrees with its shape is rejected with an error of kind
/// [`io::ErrorKind::InvalidData`].
pub trait JsonReadWrite: Sized {
    fn save_to_file(&self, file: &mut File) -> Result<(), io::Error>;
    fn load_from_file(file: &mut File) -> Result<Self, io::Error>;
}

impl<S> JsonReadWrite for S
where
    S: Serialize + DeserializeOwned,
{
    fn save_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        let json = serde_json::to_string(self)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    fn load_from_file(file: &mut File) -> Result<Self, io::Error> {
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let obj: S = serde_json::from_str(&buffer)?;
        Ok(obj)
    }
}

#[test]
#[allow(non_snake_case)]
fn test_json_io() {
    use crate::algebra::*;
    use std::io::{Seek, SeekFrom};

    let A = SquareMatrix::from(&[[4., 3.], [6., 3.]]);

    let mut file = tempfile::tempfile().unwrap();
    A.save_to_file(&mut file).unwrap();

    file.seek(SeekFrom::Start(0)).unwrap();
    let B = SquareMatrix::<f64>::load_from_file(&mut file).unwrap();
    assert_eq!(A, B);
}
