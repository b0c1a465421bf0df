//! Output assembly.
//!
//! Wraps translated partition blocks in the fixed file chrome: license
//! header, `#pragma once` preamble opening the `saturn::bsp::generated`
//! namespace, and the closing epilogue. Pure concatenation; nothing here
//! can fail.

const LICENSE_HEADER: &str = r#"// Copyright (C) 2023 Alexander Smirnov <alex.bluesman.smirnov@gmail.com>
//
// Licensed under the MIT License (the "License"); you may not use this file except
// in compliance with the License. You may obtain a copy of the License at
//
// http://opensource.org/licenses/MIT
//
// Unless required by applicable law or agreed to in writing, software distributed
// under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR
// CONDITIONS OF ANY KIND, either express or implied. See the License for the
// specific language governing permissions and limitations under the License.

"#;

const PREAMBLE: &str = "#pragma once

// (!) GENERATED CODE, DO NOT MODIFY (!)

namespace saturn {
namespace bsp {
namespace generated {

";

// No trailing newline; generated files end exactly here.
const EPILOGUE: &str = "}; // namespace generated
}; // namespace bsp
}; // namespace saturn";

/// Assemble a complete generated source file around the translated
/// partition blocks.
pub fn module(body: &str) -> String {
    let mut out = String::with_capacity(
        LICENSE_HEADER.len() + PREAMBLE.len() + body.len() + EPILOGUE.len(),
    );
    out.push_str(LICENSE_HEADER);
    out.push_str(PREAMBLE);
    out.push_str(body);
    out.push_str(EPILOGUE);
    out
}
