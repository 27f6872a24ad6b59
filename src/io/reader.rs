use std::fs::File;
use std::io::{self, prelude::*};

/// Reads a structure file, or stdin, line by line
pub struct BufReader {
    reader: Box<dyn BufRead>,
}

impl BufReader {
    /// Opens the file from the path into a reader, no path reads stdin
    pub fn open(path: Option<&str>) -> io::Result<Self> {
        let reader: Box<dyn BufRead> = match path {
            Some(p) => Box::new(io::BufReader::new(File::open(p)?)),
            None => Box::new(io::BufReader::new(io::stdin())),
        };
        Ok(Self { reader })
    }

    /// Wraps anything readable, mostly for testing
    pub fn from_reader(reader: impl Read + 'static) -> Self {
        Self { reader: Box::new(io::BufReader::new(reader)) }
    }

    /// Reads a line from the buffer reader to mutable string
    pub fn read_line<'buf>(&mut self,
                           buffer: &'buf mut String)
                           -> Option<io::Result<(&'buf mut String, usize)>>
    {
        buffer.clear();

        self.reader
            .read_line(buffer)
            .map(|u| if u == 0 { None } else { Some((buffer, u)) })
            .transpose()
    }

    /// Reads every remaining line into one String
    pub fn read_to_end(&mut self) -> io::Result<String> {
        let mut text = String::new();
        let mut buffer = String::new();
        while let Some(line) = self.read_line(&mut buffer) {
            let (line, _) = line?;
            text.push_str(line);
        }
        Ok(text)
    }
}
