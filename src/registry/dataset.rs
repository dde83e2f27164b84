// Copyright (C) 2026 The phone-input-core Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::country::Country;

/// The canonical compiled-in country dataset. One entry per country or
/// territory with its own flag asset. The registry re-sorts this table by
/// display name at initialization, so ordering here is only for
/// maintainability.
pub(crate) const COUNTRIES: &[Country] = &[
    Country::new("af", "+93", "Afghanistan", "flags/af.png"),
    Country::new("ax", "+358", "Aland Islands", "flags/ax.png"),
    Country::new("al", "+355", "Albania", "flags/al.png"),
    Country::new("dz", "+213", "Algeria", "flags/dz.png"),
    Country::new("as", "+1684", "American Samoa", "flags/as.png"),
    Country::new("ad", "+376", "Andorra", "flags/ad.png"),
    Country::new("ao", "+244", "Angola", "flags/ao.png"),
    Country::new("ai", "+1264", "Anguilla", "flags/ai.png"),
    Country::new("ag", "+1268", "Antigua and Barbuda", "flags/ag.png"),
    Country::new("ar", "+54", "Argentina", "flags/ar.png"),
    Country::new("am", "+374", "Armenia", "flags/am.png"),
    Country::new("aw", "+297", "Aruba", "flags/aw.png"),
    Country::new("au", "+61", "Australia", "flags/au.png"),
    Country::new("at", "+43", "Austria", "flags/at.png"),
    Country::new("az", "+994", "Azerbaijan", "flags/az.png"),
    Country::new("bs", "+1242", "Bahamas", "flags/bs.png"),
    Country::new("bh", "+973", "Bahrain", "flags/bh.png"),
    Country::new("bd", "+880", "Bangladesh", "flags/bd.png"),
    Country::new("bb", "+1246", "Barbados", "flags/bb.png"),
    Country::new("by", "+375", "Belarus", "flags/by.png"),
    Country::new("be", "+32", "Belgium", "flags/be.png"),
    Country::new("bz", "+501", "Belize", "flags/bz.png"),
    Country::new("bj", "+229", "Benin", "flags/bj.png"),
    Country::new("bm", "+1441", "Bermuda", "flags/bm.png"),
    Country::new("bt", "+975", "Bhutan", "flags/bt.png"),
    Country::new("bo", "+591", "Bolivia", "flags/bo.png"),
    Country::new("ba", "+387", "Bosnia and Herzegovina", "flags/ba.png"),
    Country::new("bw", "+267", "Botswana", "flags/bw.png"),
    Country::new("br", "+55", "Brazil", "flags/br.png"),
    Country::new("io", "+246", "British Indian Ocean Territory", "flags/io.png"),
    Country::new("vg", "+1284", "British Virgin Islands", "flags/vg.png"),
    Country::new("bn", "+673", "Brunei", "flags/bn.png"),
    Country::new("bg", "+359", "Bulgaria", "flags/bg.png"),
    Country::new("bf", "+226", "Burkina Faso", "flags/bf.png"),
    Country::new("bi", "+257", "Burundi", "flags/bi.png"),
    Country::new("kh", "+855", "Cambodia", "flags/kh.png"),
    Country::new("cm", "+237", "Cameroon", "flags/cm.png"),
    Country::new("ca", "+1", "Canada", "flags/ca.png"),
    Country::new("cv", "+238", "Cape Verde", "flags/cv.png"),
    Country::new("ky", "+1345", "Cayman Islands", "flags/ky.png"),
    Country::new("cf", "+236", "Central African Republic", "flags/cf.png"),
    Country::new("td", "+235", "Chad", "flags/td.png"),
    Country::new("cl", "+56", "Chile", "flags/cl.png"),
    Country::new("cn", "+86", "China", "flags/cn.png"),
    Country::new("cx", "+61", "Christmas Island", "flags/cx.png"),
    Country::new("cc", "+61", "Cocos Islands", "flags/cc.png"),
    Country::new("co", "+57", "Colombia", "flags/co.png"),
    Country::new("km", "+269", "Comoros", "flags/km.png"),
    Country::new("cg", "+242", "Congo", "flags/cg.png"),
    Country::new("ck", "+682", "Cook Islands", "flags/ck.png"),
    Country::new("cr", "+506", "Costa Rica", "flags/cr.png"),
    Country::new("ci", "+225", "Côte D'ivoire", "flags/ci.png"),
    Country::new("hr", "+385", "Croatia", "flags/hr.png"),
    Country::new("cu", "+53", "Cuba", "flags/cu.png"),
    Country::new("cw", "+599", "Curaçao", "flags/cw.png"),
    Country::new("cy", "+357", "Cyprus", "flags/cy.png"),
    Country::new("cz", "+420", "Czechia", "flags/cz.png"),
    Country::new("cd", "+243", "Democratic Republic of the Congo", "flags/cd.png"),
    Country::new("dk", "+45", "Denmark", "flags/dk.png"),
    Country::new("dj", "+253", "Djibouti", "flags/dj.png"),
    Country::new("dm", "+1767", "Dominica", "flags/dm.png"),
    Country::new("do", "+1809", "Dominican Republic", "flags/do.png"),
    Country::new("ec", "+593", "Ecuador", "flags/ec.png"),
    Country::new("eg", "+20", "Egypt", "flags/eg.png"),
    Country::new("sv", "+503", "El Salvador", "flags/sv.png"),
    Country::new("gq", "+240", "Equatorial Guinea", "flags/gq.png"),
    Country::new("er", "+291", "Eritrea", "flags/er.png"),
    Country::new("ee", "+372", "Estonia", "flags/ee.png"),
    Country::new("sz", "+268", "Eswatini", "flags/sz.png"),
    Country::new("et", "+251", "Ethiopia", "flags/et.png"),
    Country::new("fk", "+500", "Falkland Islands", "flags/fk.png"),
    Country::new("fo", "+298", "Faroe Islands", "flags/fo.png"),
    Country::new("fj", "+679", "Fiji", "flags/fj.png"),
    Country::new("fi", "+358", "Finland", "flags/fi.png"),
    Country::new("fr", "+33", "France", "flags/fr.png"),
    Country::new("gf", "+594", "French Guiana", "flags/gf.png"),
    Country::new("pf", "+689", "French Polynesia", "flags/pf.png"),
    Country::new("ga", "+241", "Gabon", "flags/ga.png"),
    Country::new("gm", "+220", "Gambia", "flags/gm.png"),
    Country::new("ge", "+995", "Georgia", "flags/ge.png"),
    Country::new("de", "+49", "Germany", "flags/de.png"),
    Country::new("gh", "+233", "Ghana", "flags/gh.png"),
    Country::new("gi", "+350", "Gibraltar", "flags/gi.png"),
    Country::new("gr", "+30", "Greece", "flags/gr.png"),
    Country::new("gl", "+299", "Greenland", "flags/gl.png"),
    Country::new("gd", "+1473", "Grenada", "flags/gd.png"),
    Country::new("gp", "+590", "Guadeloupe", "flags/gp.png"),
    Country::new("gu", "+1671", "Guam", "flags/gu.png"),
    Country::new("gt", "+502", "Guatemala", "flags/gt.png"),
    Country::new("gg", "+44", "Guernsey", "flags/gg.png"),
    Country::new("gn", "+224", "Guinea", "flags/gn.png"),
    Country::new("gw", "+245", "Guinea-Bissau", "flags/gw.png"),
    Country::new("gy", "+592", "Guyana", "flags/gy.png"),
    Country::new("ht", "+509", "Haiti", "flags/ht.png"),
    Country::new("hn", "+504", "Honduras", "flags/hn.png"),
    Country::new("hk", "+852", "Hong Kong", "flags/hk.png"),
    Country::new("hu", "+36", "Hungary", "flags/hu.png"),
    Country::new("is", "+354", "Iceland", "flags/is.png"),
    Country::new("in", "+91", "India", "flags/in.png"),
    Country::new("id", "+62", "Indonesia", "flags/id.png"),
    Country::new("ir", "+98", "Iran", "flags/ir.png"),
    Country::new("iq", "+964", "Iraq", "flags/iq.png"),
    Country::new("ie", "+353", "Ireland", "flags/ie.png"),
    Country::new("im", "+44", "Isle of Man", "flags/im.png"),
    Country::new("il", "+972", "Israel", "flags/il.png"),
    Country::new("it", "+39", "Italy", "flags/it.png"),
    Country::new("jm", "+1876", "Jamaica", "flags/jm.png"),
    Country::new("jp", "+81", "Japan", "flags/jp.png"),
    Country::new("je", "+44", "Jersey", "flags/je.png"),
    Country::new("jo", "+962", "Jordan", "flags/jo.png"),
    Country::new("kz", "+7", "Kazakhstan", "flags/kz.png"),
    Country::new("ke", "+254", "Kenya", "flags/ke.png"),
    Country::new("ki", "+686", "Kiribati", "flags/ki.png"),
    Country::new("xk", "+383", "Kosovo", "flags/xk.png"),
    Country::new("kw", "+965", "Kuwait", "flags/kw.png"),
    Country::new("kg", "+996", "Kyrgyzstan", "flags/kg.png"),
    Country::new("la", "+856", "Laos", "flags/la.png"),
    Country::new("lv", "+371", "Latvia", "flags/lv.png"),
    Country::new("lb", "+961", "Lebanon", "flags/lb.png"),
    Country::new("ls", "+266", "Lesotho", "flags/ls.png"),
    Country::new("lr", "+231", "Liberia", "flags/lr.png"),
    Country::new("ly", "+218", "Libya", "flags/ly.png"),
    Country::new("li", "+423", "Liechtenstein", "flags/li.png"),
    Country::new("lt", "+370", "Lithuania", "flags/lt.png"),
    Country::new("lu", "+352", "Luxembourg", "flags/lu.png"),
    Country::new("mo", "+853", "Macau", "flags/mo.png"),
    Country::new("mg", "+261", "Madagascar", "flags/mg.png"),
    Country::new("mw", "+265", "Malawi", "flags/mw.png"),
    Country::new("my", "+60", "Malaysia", "flags/my.png"),
    Country::new("mv", "+960", "Maldives", "flags/mv.png"),
    Country::new("ml", "+223", "Mali", "flags/ml.png"),
    Country::new("mt", "+356", "Malta", "flags/mt.png"),
    Country::new("mh", "+692", "Marshall Islands", "flags/mh.png"),
    Country::new("mq", "+596", "Martinique", "flags/mq.png"),
    Country::new("mr", "+222", "Mauritania", "flags/mr.png"),
    Country::new("mu", "+230", "Mauritius", "flags/mu.png"),
    Country::new("yt", "+262", "Mayotte", "flags/yt.png"),
    Country::new("mx", "+52", "Mexico", "flags/mx.png"),
    Country::new("fm", "+691", "Micronesia", "flags/fm.png"),
    Country::new("md", "+373", "Moldova", "flags/md.png"),
    Country::new("mc", "+377", "Monaco", "flags/mc.png"),
    Country::new("mn", "+976", "Mongolia", "flags/mn.png"),
    Country::new("me", "+382", "Montenegro", "flags/me.png"),
    Country::new("ms", "+1664", "Montserrat", "flags/ms.png"),
    Country::new("ma", "+212", "Morocco", "flags/ma.png"),
    Country::new("mz", "+258", "Mozambique", "flags/mz.png"),
    Country::new("mm", "+95", "Myanmar", "flags/mm.png"),
    Country::new("na", "+264", "Namibia", "flags/na.png"),
    Country::new("nr", "+674", "Nauru", "flags/nr.png"),
    Country::new("np", "+977", "Nepal", "flags/np.png"),
    Country::new("nl", "+31", "Netherlands", "flags/nl.png"),
    Country::new("nc", "+687", "New Caledonia", "flags/nc.png"),
    Country::new("nz", "+64", "New Zealand", "flags/nz.png"),
    Country::new("ni", "+505", "Nicaragua", "flags/ni.png"),
    Country::new("ne", "+227", "Niger", "flags/ne.png"),
    Country::new("ng", "+234", "Nigeria", "flags/ng.png"),
    Country::new("nu", "+683", "Niue", "flags/nu.png"),
    Country::new("nf", "+672", "Norfolk Island", "flags/nf.png"),
    Country::new("kp", "+850", "North Korea", "flags/kp.png"),
    Country::new("mk", "+389", "North Macedonia", "flags/mk.png"),
    Country::new("mp", "+1670", "Northern Mariana Islands", "flags/mp.png"),
    Country::new("no", "+47", "Norway", "flags/no.png"),
    Country::new("om", "+968", "Oman", "flags/om.png"),
    Country::new("pk", "+92", "Pakistan", "flags/pk.png"),
    Country::new("pw", "+680", "Palau", "flags/pw.png"),
    Country::new("ps", "+970", "Palestine", "flags/ps.png"),
    Country::new("pa", "+507", "Panama", "flags/pa.png"),
    Country::new("pg", "+675", "Papua New Guinea", "flags/pg.png"),
    Country::new("py", "+595", "Paraguay", "flags/py.png"),
    Country::new("pe", "+51", "Peru", "flags/pe.png"),
    Country::new("ph", "+63", "Philippines", "flags/ph.png"),
    Country::new("pl", "+48", "Poland", "flags/pl.png"),
    Country::new("pt", "+351", "Portugal", "flags/pt.png"),
    Country::new("pr", "+1787", "Puerto Rico", "flags/pr.png"),
    Country::new("qa", "+974", "Qatar", "flags/qa.png"),
    Country::new("ro", "+40", "Romania", "flags/ro.png"),
    Country::new("ru", "+7", "Russia", "flags/ru.png"),
    Country::new("rw", "+250", "Rwanda", "flags/rw.png"),
    Country::new("re", "+262", "Réunion", "flags/re.png"),
    Country::new("bl", "+590", "Saint Barthélemy", "flags/bl.png"),
    Country::new("sh", "+290", "Saint Helena", "flags/sh.png"),
    Country::new("kn", "+1869", "Saint Kitts and Nevis", "flags/kn.png"),
    Country::new("lc", "+1758", "Saint Lucia", "flags/lc.png"),
    Country::new("mf", "+590", "Saint Martin", "flags/mf.png"),
    Country::new("pm", "+508", "Saint Pierre and Miquelon", "flags/pm.png"),
    Country::new("vc", "+1784", "Saint Vincent and the Grenadines", "flags/vc.png"),
    Country::new("ws", "+685", "Samoa", "flags/ws.png"),
    Country::new("sm", "+378", "San Marino", "flags/sm.png"),
    Country::new("st", "+239", "São Tomé and Príncipe", "flags/st.png"),
    Country::new("sa", "+966", "Saudi Arabia", "flags/sa.png"),
    Country::new("sn", "+221", "Senegal", "flags/sn.png"),
    Country::new("rs", "+381", "Serbia", "flags/rs.png"),
    Country::new("sc", "+248", "Seychelles", "flags/sc.png"),
    Country::new("sl", "+232", "Sierra Leone", "flags/sl.png"),
    Country::new("sg", "+65", "Singapore", "flags/sg.png"),
    Country::new("sx", "+1721", "Sint Maarten", "flags/sx.png"),
    Country::new("sk", "+421", "Slovakia", "flags/sk.png"),
    Country::new("si", "+386", "Slovenia", "flags/si.png"),
    Country::new("sb", "+677", "Solomon Islands", "flags/sb.png"),
    Country::new("so", "+252", "Somalia", "flags/so.png"),
    Country::new("za", "+27", "South Africa", "flags/za.png"),
    Country::new("kr", "+82", "South Korea", "flags/kr.png"),
    Country::new("ss", "+211", "South Sudan", "flags/ss.png"),
    Country::new("es", "+34", "Spain", "flags/es.png"),
    Country::new("lk", "+94", "Sri Lanka", "flags/lk.png"),
    Country::new("sd", "+249", "Sudan", "flags/sd.png"),
    Country::new("sr", "+597", "Suriname", "flags/sr.png"),
    Country::new("se", "+46", "Sweden", "flags/se.png"),
    Country::new("ch", "+41", "Switzerland", "flags/ch.png"),
    Country::new("sy", "+963", "Syria", "flags/sy.png"),
    Country::new("tw", "+886", "Taiwan", "flags/tw.png"),
    Country::new("tj", "+992", "Tajikistan", "flags/tj.png"),
    Country::new("tz", "+255", "Tanzania", "flags/tz.png"),
    Country::new("th", "+66", "Thailand", "flags/th.png"),
    Country::new("tl", "+670", "Timor-Leste", "flags/tl.png"),
    Country::new("tg", "+228", "Togo", "flags/tg.png"),
    Country::new("tk", "+690", "Tokelau", "flags/tk.png"),
    Country::new("to", "+676", "Tonga", "flags/to.png"),
    Country::new("tt", "+1868", "Trinidad and Tobago", "flags/tt.png"),
    Country::new("tn", "+216", "Tunisia", "flags/tn.png"),
    Country::new("tr", "+90", "Turkey", "flags/tr.png"),
    Country::new("tm", "+993", "Turkmenistan", "flags/tm.png"),
    Country::new("tc", "+1649", "Turks and Caicos Islands", "flags/tc.png"),
    Country::new("tv", "+688", "Tuvalu", "flags/tv.png"),
    Country::new("vi", "+1340", "U.S. Virgin Islands", "flags/vi.png"),
    Country::new("ug", "+256", "Uganda", "flags/ug.png"),
    Country::new("ua", "+380", "Ukraine", "flags/ua.png"),
    Country::new("ae", "+971", "United Arab Emirates", "flags/ae.png"),
    Country::new("gb", "+44", "United Kingdom", "flags/gb.png"),
    Country::new("us", "+1", "United States", "flags/us.png"),
    Country::new("uy", "+598", "Uruguay", "flags/uy.png"),
    Country::new("uz", "+998", "Uzbekistan", "flags/uz.png"),
    Country::new("vu", "+678", "Vanuatu", "flags/vu.png"),
    Country::new("va", "+379", "Vatican City", "flags/va.png"),
    Country::new("ve", "+58", "Venezuela", "flags/ve.png"),
    Country::new("vn", "+84", "Vietnam", "flags/vn.png"),
    Country::new("wf", "+681", "Wallis and Futuna", "flags/wf.png"),
    Country::new("ye", "+967", "Yemen", "flags/ye.png"),
    Country::new("zm", "+260", "Zambia", "flags/zm.png"),
    Country::new("zw", "+263", "Zimbabwe", "flags/zw.png"),
];
