// Nothing to document here.
use std::fmt;
